lib::entry!(input = "d04.txt", y2021::bingo::solve);
