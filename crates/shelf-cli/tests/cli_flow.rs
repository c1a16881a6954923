use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shelf"))
}

/// Isolated HOME/XDG directories and a data file path inside them.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.dir.path().join("inventory.json")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn base_command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env_remove("SHELF_FILE")
            .env_remove("SHELF_CONFIG")
            .env_remove("SHELF_LOG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .current_dir(self.dir.path())
            .stdin(Stdio::null());
        cmd
    }

    /// Run with `--file` pointing at the sandbox data file.
    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.base_command();
        cmd.arg("--file").arg(self.data_file()).args(args);
        cmd.output().expect("run shelf")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "shelf {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        serde_json::from_str(&self.run_ok(args)).expect("valid json")
    }

    /// Add an item and return its id.
    fn add(&self, name: &str, stock: &str, price: &str) -> String {
        let stdout = self.run_ok(&["add", name, "--stock", stock, "--price", price]);
        stdout
            .lines()
            .find_map(|line| line.strip_prefix("id="))
            .expect("id in receipt")
            .to_string()
    }
}

fn exit_code(output: &Output) -> i32 {
    output.status.code().expect("exit code")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn read_records(path: &Path) -> Vec<Value> {
    let contents = std::fs::read_to_string(path).expect("read data file");
    serde_json::from_str(&contents).expect("data file is a JSON array")
}

#[test]
fn test_add_list_and_totals() {
    let sandbox = Sandbox::new();
    let kopi = sandbox.add("Kopi", "10", "5000");
    sandbox.add("Beras", "2", "12000");

    let listing = sandbox.run_json(&["list", "--json"]);
    let rows = listing["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Beras");
    assert_eq!(rows[1]["id"], kopi.as_str());
    assert_eq!(rows[1]["line_value"], 50000.0);
    assert_eq!(listing["total_stock"], 12);
    assert_eq!(listing["total_value"], 74000.0);

    assert!(kopi.starts_with("ITM"));
    assert_eq!(read_records(&sandbox.data_file()).len(), 2);
}

#[test]
fn test_plain_list_is_tab_separated() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Teh Hijau", "3", "1500");

    let stdout = sandbox.run_ok(&["list", "--format", "plain", "--no-details"]);

    assert!(stdout.starts_with("shelf list"));
    assert!(stdout.contains(&format!("{}\tTeh Hijau\t3\t1500\t4500", id)));
    assert!(stdout.contains("total_stock=3"));
}

#[test]
fn test_duplicate_name_fails_without_merge() {
    let sandbox = Sandbox::new();
    sandbox.add("Gula", "4", "15000");

    let output = sandbox.run(&["add", "gula", "--stock", "1", "--price", "1"]);

    assert_eq!(exit_code(&output), 5);
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(read_records(&sandbox.data_file()).len(), 1);
}

#[test]
fn test_merge_adds_stock_to_existing_item() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Gula", "4", "15000");

    sandbox.run_ok(&["add", "GULA", "--stock", "6", "--price", "1", "--merge"]);

    let records = read_records(&sandbox.data_file());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], id.as_str());
    assert_eq!(records[0]["stock"], 10);
    assert_eq!(records[0]["price"], 15000.0);
}

#[test]
fn test_invalid_input_exit_code_and_no_write() {
    let sandbox = Sandbox::new();

    let negative = sandbox.run(&["add", "Kopi", "--stock", "-1", "--price", "10"]);
    let not_a_number = sandbox.run(&["add", "Kopi", "--stock", "abc", "--price", "10"]);

    assert_eq!(exit_code(&negative), 4);
    assert_eq!(exit_code(&not_a_number), 4);
    assert!(!sandbox.data_file().exists());
}

#[test]
fn test_unknown_id_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox.add("Kopi", "1", "1");

    let output = sandbox.run(&["show", "ITM00000000000000"]);

    assert_eq!(exit_code(&output), 3);
    let err = stderr(&output);
    assert!(err.contains("Item not found: ITM00000000000000"));
    assert!(err.contains("shelf list"));
}

#[test]
fn test_show_json_includes_line_value() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Kopi", "3", "2500");

    let item = sandbox.run_json(&["show", &id, "--json"]);

    assert_eq!(item["name"], "Kopi");
    assert_eq!(item["line_value"], 7500.0);
    assert_eq!(item["created_at"], item["updated_at"]);
}

#[test]
fn test_edit_updates_fields() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Kopi", "3", "2500");

    sandbox.run_ok(&["edit", &id, "--name", "Kopi Bubuk", "--price", "3000"]);

    let item = sandbox.run_json(&["show", &id, "--json"]);
    assert_eq!(item["name"], "Kopi Bubuk");
    assert_eq!(item["stock"], 3);
    assert_eq!(item["price"], 3000.0);
}

#[test]
fn test_edit_without_fields_needs_terminal() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Kopi", "3", "2500");

    let output = sandbox.run(&["edit", &id]);

    assert_eq!(exit_code(&output), 4);
    assert!(stderr(&output).contains("Nothing to change"));
}

#[test]
fn test_stock_remove_clamps_at_zero() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Kopi", "5", "100");

    let change = sandbox.run_json(&["stock", &id, "--remove", "50", "--json"]);

    assert_eq!(change["old"], 5);
    assert_eq!(change["new"], 0);
    let item = sandbox.run_json(&["show", &id, "--json"]);
    assert_eq!(item["stock"], 0);
}

#[test]
fn test_stock_add_and_set() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Kopi", "5", "100");

    sandbox.run_ok(&["stock", &id, "--add", "7"]);
    assert_eq!(sandbox.run_json(&["show", &id, "--json"])["stock"], 12);

    let stdout = sandbox.run_ok(&["stock", &id, "--set", "0"]);
    assert!(stdout.contains("new_stock=0"));
    assert!(stdout.contains("out of stock"));
}

#[test]
fn test_delete_requires_yes_without_terminal() {
    let sandbox = Sandbox::new();
    let id = sandbox.add("Kopi", "5", "100");

    let refused = sandbox.run(&["delete", &id]);
    assert_eq!(exit_code(&refused), 4);
    assert_eq!(read_records(&sandbox.data_file()).len(), 1);

    sandbox.run_ok(&["delete", &id, "--yes"]);
    assert!(read_records(&sandbox.data_file()).is_empty());

    let again = sandbox.run(&["delete", &id, "--yes"]);
    assert_eq!(exit_code(&again), 3);
}

#[test]
fn test_search_is_case_insensitive() {
    let sandbox = Sandbox::new();
    sandbox.add("Kopi Hitam", "1", "1");
    sandbox.add("Teh", "1", "1");
    sandbox.add("kopi susu", "1", "1");

    let matches = sandbox.run_json(&["search", "KOPI", "--json"]);
    let names: Vec<&str> = matches
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Kopi Hitam", "kopi susu"]);

    let blank = sandbox.run(&["search", "  "]);
    assert_eq!(exit_code(&blank), 4);
}

#[test]
fn test_export_writes_csv() {
    let sandbox = Sandbox::new();
    sandbox.add("Teh, Hijau", "2", "1500");
    let target = sandbox.dir.path().join("out.csv");

    sandbox.run_ok(&["export", target.to_str().expect("utf8 path")]);

    let csv = std::fs::read_to_string(&target).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Nama,Stok,Harga,Total Nilai,Tanggal Dibuat,Tanggal Diupdate")
    );
    assert!(lines.next().expect("row").contains(",\"Teh, Hijau\",2,1500,3000,"));
}

#[test]
fn test_export_default_name_in_working_directory() {
    let sandbox = Sandbox::new();
    sandbox.add("Kopi", "1", "1");

    sandbox.run_ok(&["export"]);

    let exported: Vec<_> = std::fs::read_dir(sandbox.dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("inventory_export_") && name.ends_with(".csv"))
        .collect();
    assert_eq!(exported.len(), 1);
}

#[test]
fn test_summary_empty_and_populated() {
    let sandbox = Sandbox::new();

    let empty = sandbox.run_ok(&["summary"]);
    assert!(empty.contains("Inventory is empty"));
    assert_eq!(sandbox.run_json(&["summary", "--json"])["item_count"], 0);

    sandbox.add("A", "5", "10");
    sandbox.add("B", "2", "100");
    let summary = sandbox.run_json(&["summary", "--json"]);
    assert_eq!(summary["item_count"], 2);
    assert_eq!(summary["total_stock"], 7);
    assert_eq!(summary["total_value"], 250.0);
    assert_eq!(summary["average_value"], 125.0);
    assert_eq!(summary["lowest_stock"]["name"], "B");
    assert_eq!(summary["highest_value"]["name"], "B");
}

#[test]
fn test_corrupt_file_is_reported_and_left_alone() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.data_file(), "{ not json").expect("write corrupt file");

    let output = sandbox.run(&["add", "Kopi", "--stock", "1", "--price", "1"]);

    assert_eq!(exit_code(&output), 6);
    assert!(stderr(&output).contains("Format error"));
    assert_eq!(
        std::fs::read_to_string(sandbox.data_file()).expect("read file"),
        "{ not json"
    );
}

#[test]
fn test_load_warnings_go_to_stderr() {
    let sandbox = Sandbox::new();
    std::fs::write(
        sandbox.data_file(),
        r#"[{"id":"X1","name":"Rusak","stock":-2,"price":10.0,"created_at":"2024-01-01 08:00:00","updated_at":"2024-01-01 08:00:00"}]"#,
    )
    .expect("write data file");

    let output = sandbox.run(&["list", "--json"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("negative stock"));
    let listing: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(listing["total_stock"], -2);
}

#[test]
fn test_menu_needs_terminal() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&[]);

    assert_eq!(exit_code(&output), 4);
    assert!(stderr(&output).contains("needs a terminal"));
}

#[test]
fn test_init_then_commands_use_configured_file() {
    let sandbox = Sandbox::new();
    let data = sandbox.dir.path().join("shop").join("stock.json");

    let mut init = sandbox.base_command();
    init.args(["init", data.to_str().expect("utf8 path"), "--currency", "Rp"]);
    let output = init.output().expect("run init");
    assert!(output.status.success(), "{}", stderr(&output));

    let config = sandbox.config_home().join("shelf").join("config.toml");
    let contents = std::fs::read_to_string(&config).expect("read config");
    assert!(contents.contains("[inventory]"));
    assert!(contents.contains("currency = \"Rp\""));

    let mut add = sandbox.base_command();
    add.args(["add", "Kopi", "--stock", "1", "--price", "1"]);
    assert!(add.output().expect("run add").status.success());
    assert_eq!(read_records(&data).len(), 1);

    let mut again = sandbox.base_command();
    again.args(["init", "elsewhere.json"]);
    let output = again.output().expect("run init again");
    assert_eq!(exit_code(&output), 4);
    assert!(stderr(&output).contains("--force"));
}

#[test]
fn test_missing_explicit_config_is_not_found() {
    let sandbox = Sandbox::new();

    let mut cmd = sandbox.base_command();
    cmd.env("SHELF_CONFIG", sandbox.dir.path().join("absent.toml"))
        .args(["list"]);
    let output = cmd.output().expect("run list");

    assert_eq!(exit_code(&output), 3);
    assert!(stderr(&output).contains("No config found"));
}

#[test]
fn test_default_data_file_under_xdg_data_home() {
    let sandbox = Sandbox::new();

    let mut cmd = sandbox.base_command();
    cmd.args(["add", "Kopi", "--stock", "1", "--price", "1"]);
    assert!(cmd.output().expect("run add").status.success());

    let default = sandbox
        .dir
        .path()
        .join("data")
        .join("shelf")
        .join("inventory_data.json");
    assert_eq!(read_records(&default).len(), 1);
}

#[test]
fn test_completions_generate() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&["completions", "bash"]);
    assert!(stdout.contains("shelf"));
}
