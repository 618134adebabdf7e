lib::entry!(input = "d03.txt", y2021::diagnostic::solve);
