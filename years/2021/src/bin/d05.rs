lib::entry!(input = "d05.txt", y2021::vents::solve);
