lib::entry!(input = "d02.txt", y2021::dive::solve);
