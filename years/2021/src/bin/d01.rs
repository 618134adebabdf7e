lib::entry!(input = "d01.txt", y2021::sonar::solve);
