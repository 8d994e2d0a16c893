use predicates::str::contains;

mod common;
use common::{add_inspection, ilog, init_db_with_data, setup_test_db};

#[test]
fn test_add_then_list_shows_all_fields() {
    let db_path = setup_test_db("add_list_fields");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_inspection(&db_path, "23.5", "55", "1.2m", "12", "4", "Ana");

    ilog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("ID: 1"))
        .stdout(contains("Temperature: 23.5"))
        .stdout(contains("Humidity: 55"))
        .stdout(contains("Water level: 1.2m"))
        .stdout(contains("Lamps: 12"))
        .stdout(contains("Extinguishers: 4"))
        .stdout(contains("Inspector: Ana"));
}

#[test]
fn test_ids_are_assigned_in_insertion_order() {
    let db_path = setup_test_db("id_order");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_inspection(&db_path, "20.5", "50", "1.0m", "10", "2", "Ana");
    add_inspection(&db_path, "21.0", "51", "1.0m", "10", "2", "Luis");
    add_inspection(&db_path, "19.8", "52", "1.0m", "10", "2", "Marta");

    ilog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("ID: 1"))
        .stdout(contains("ID: 2"))
        .stdout(contains("ID: 3"));
}

#[test]
fn test_invalid_temperature_rejected_and_nothing_written() {
    let db_path = setup_test_db("invalid_temp");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ilog()
        .args(["--db", &db_path, "add", "abc", "55", "1.2m", "12", "4", "Ana"])
        .assert()
        .failure()
        .stderr(contains("Temperature must be a number"));

    ilog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No inspections recorded yet."));
}

#[test]
fn test_first_invalid_field_is_the_one_reported() {
    let db_path = setup_test_db("first_invalid");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // humidity, lamp count and inspector are all invalid; humidity comes first
    ilog()
        .args(["--db", &db_path, "add", "23.5", "wet", "1.2m", "some", "4", " "])
        .assert()
        .failure()
        .stderr(contains("Humidity must be a number"));
}

#[test]
fn test_empty_inspector_rejected() {
    let db_path = setup_test_db("empty_inspector");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ilog()
        .args(["--db", &db_path, "add", "23.5", "55", "1.2m", "12", "4", "  "])
        .assert()
        .failure()
        .stderr(contains("Inspector must not be empty"));
}

#[test]
fn test_inspector_name_is_trimmed() {
    let db_path = setup_test_db("trimmed_inspector");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_inspection(&db_path, "23.5", "55", "1.2m", "12", "4", "  Ana  ");

    ilog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Inspector: Ana"));
}

#[test]
fn test_init_twice_keeps_existing_records() {
    let db_path = setup_test_db("init_idempotent");
    init_db_with_data(&db_path);

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ilog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Inspector: Ana"))
        .stdout(contains("Inspector: Luis"));
}

#[test]
fn test_list_table_mode_renders_header_and_rows() {
    let db_path = setup_test_db("list_table");
    init_db_with_data(&db_path);

    ilog()
        .args(["--db", &db_path, "list", "--table"])
        .assert()
        .success()
        .stdout(contains("ID"))
        .stdout(contains("Inspector"))
        .stdout(contains("Ana"))
        .stdout(contains("Luis"));
}

#[test]
fn test_chart_prints_series_in_insertion_order() {
    let db_path = setup_test_db("chart_series");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_inspection(&db_path, "20.5", "50", "1.0m", "10", "2", "Ana");
    add_inspection(&db_path, "21.7", "51", "1.0m", "10", "2", "Ana");
    add_inspection(&db_path, "19.8", "52", "1.0m", "10", "2", "Ana");

    let output = ilog()
        .args(["--db", &db_path, "chart"])
        .assert()
        .success()
        .stdout(contains("Timestamp"))
        .stdout(contains("Temperature"))
        .stdout(contains("Humidity"))
        .get_output()
        .clone();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let p205 = stdout.find("20.5").expect("20.5 in chart output");
    let p217 = stdout.find("21.7").expect("21.7 in chart output");
    let p198 = stdout.find("19.8").expect("19.8 in chart output");
    assert!(p205 < p217 && p217 < p198);
}

#[test]
fn test_chart_with_no_records_reports_nothing_to_plot() {
    let db_path = setup_test_db("chart_empty");

    ilog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ilog()
        .args(["--db", &db_path, "chart"])
        .assert()
        .success()
        .stdout(contains("No inspections to chart."));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("oplog");
    init_db_with_data(&db_path);

    ilog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_and_integrity_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    ilog()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total inspections:"));

    ilog()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity check passed"));
}
