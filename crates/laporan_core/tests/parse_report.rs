use laporan_core::{extract_period, parse, parse_report, ReportPeriod, PERIOD_PLACEHOLDER};

const WEEKLY_REPORT: &str = "Selamat sore, laporan mingguan proyek
periode laporan 10 - 16 Januari 2024

1. Group Sipil Jalan = Adapun pekerjaan yang dikerjakan minggu ini adalah =
(A). Pengecoran jalan akses, (jumlah pekerja 5 orang) schedule besok
(B). pemadatan TANAH timbunan. (jumlah pekerja 3 orang)
(C). Pembersihan area

2. Group Alat Berat =
catatan: semua unit siap
1.(Excavator) (PC200) Pekerjaan galian = gali saluran drainase
2.(Dump Truck) (DT-01) pekerjaan angkut = angkut tanah buangan

3. group Mekanik = tidak ada kegiatan

4. Group sipil gedung = Adapun pekerjaan yang dikerjakan adalah =
(A). Bekisting kolom lantai 2
";

#[test]
fn concrete_civil_scenario_yields_expected_tasks() {
    let raw = "1. Group Sipil Jalan = Adapun pekerjaan yang dikerjakan adalah = (A). Pengecoran jalan, (jumlah pekerja 5 orang) schedule besok (B). Pemadatan tanah.";
    let groups = parse(raw);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Sipil Jalan");
    assert_eq!(
        groups[0].tasks,
        vec![
            "Pengecoran jalan (dikerjakan oleh 5 orang).".to_string(),
            "Pemadatan tanah.".to_string(),
        ]
    );
    assert!(groups[0].documentation.is_empty());
}

#[test]
fn weekly_report_keeps_group_and_task_order() {
    let report = parse_report(WEEKLY_REPORT);

    let names: Vec<&str> = report.groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Sipil Jalan", "Alat Berat", "Sipil Gedung"]);

    assert_eq!(
        report.groups[0].tasks,
        vec![
            "Pengecoran jalan akses (dikerjakan oleh 5 orang).".to_string(),
            "Pemadatan tanah timbunan (dikerjakan oleh 3 orang).".to_string(),
            "Pembersihan area.".to_string(),
        ]
    );
    assert_eq!(
        report.groups[1].tasks,
        vec![
            "(Excavator): Gali saluran drainase".to_string(),
            "(Dump Truck): Angkut tanah buangan".to_string(),
        ]
    );
    assert_eq!(
        report.groups[2].tasks,
        vec!["Bekisting kolom lantai 2.".to_string()]
    );
    assert_eq!(
        report.period,
        ReportPeriod::Found("10 - 16 Januari 2024".to_string())
    );
}

#[test]
fn every_counted_civil_item_gets_a_worker_suffix() {
    let letters = ["A", "B", "C", "D", "E", "F"];
    let mut raw =
        String::from("1. Group Sipil Drainase = Adapun pekerjaan yang dikerjakan adalah =\n");
    for (index, letter) in letters.iter().enumerate() {
        raw.push_str(&format!(
            "({letter}). pekerjaan nomor {index}, (jumlah pekerja {} orang)\n",
            index + 2
        ));
    }

    let groups = parse(&raw);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].tasks.len(), letters.len());
    for (index, task) in groups[0].tasks.iter().enumerate() {
        assert!(!task.is_empty());
        assert!(
            task.ends_with(&format!("(dikerjakan oleh {} orang).", index + 2)),
            "unexpected task: {task}"
        );
    }
}

#[test]
fn generic_labels_prefix_their_tasks() {
    let raw = "1. Group Alat Berat = 1.(Motor Grader) (MG-2) pekerjaan perataan = ratakan badan jalan";
    let groups = parse(raw);

    assert_eq!(groups.len(), 1);
    assert!(groups[0].tasks[0].starts_with("(Motor Grader): "));
    assert_eq!(groups[0].tasks[0], "(Motor Grader): Ratakan badan jalan");
}

#[test]
fn reparsing_emitted_civil_tasks_changes_nothing() {
    let first = parse(
        "1. Group Sipil = Adapun pekerjaan yang dikerjakan adalah = \
         (A). urugan sirtu (jumlah pekerja 4 orang) schedule lusa (B). Finishing bahu jalan",
    );
    let tasks = &first[0].tasks;

    let mut reserialized =
        String::from("1. Group Sipil = Adapun pekerjaan yang dikerjakan adalah =");
    let letters = ["A", "B", "C"];
    for (letter, task) in letters.iter().zip(tasks) {
        reserialized.push_str(&format!(" ({letter}). {task}"));
    }

    let second = parse(&reserialized);
    assert_eq!(&second[0].tasks, tasks);
}

#[test]
fn input_without_delimiters_is_empty_with_placeholder() {
    let raw = "Sipil Jalan = Adapun pekerjaan yang dikerjakan adalah = (A). Galian";
    let report = parse_report(raw);

    assert!(report.groups.is_empty());
    assert_eq!(report.period, ReportPeriod::NotFound);
    assert_eq!(report.period.as_str(), PERIOD_PLACEHOLDER);
}

#[test]
fn empty_and_blank_input_parse_to_nothing() {
    assert!(parse("").is_empty());
    assert!(parse("   \n\t  ").is_empty());
    assert!(parse("1. Group\n2. Group   ").is_empty());
}

#[test]
fn groups_without_tasks_are_dropped() {
    let raw = "1. Group Sipil Jalan = belum ada laporan\n\
               2. Group Mekanik = 1.(Genset) perawatan rutin\n\
               3. Group Alat Berat = 1.(Dozer) (D6) pekerjaan = dorong material";
    let groups = parse(raw);

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Alat Berat");
    assert_eq!(groups[0].tasks, vec!["(Dozer): Dorong material".to_string()]);
}

#[test]
fn period_found_anywhere_in_text() {
    let raw = "1. Group Sipil = x\nLaporan ini untuk periode laporan 10 - 16 Januari 2024.";
    assert_eq!(extract_period(raw).as_str(), "10 - 16 Januari 2024");
}
