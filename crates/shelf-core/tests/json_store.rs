use std::fs;
use std::path::PathBuf;

use shelf_core::{
    AddOutcome, DuplicateDecision, InventoryError, InventoryStore, ItemPatch, LoadOutcome,
    LoadWarning, NewItem,
};
use tempfile::{tempdir, TempDir};

fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("inventory_data.json")
}

#[test]
fn test_missing_file_starts_empty() {
    let dir = tempdir().expect("tempdir");
    let (store, outcome) = InventoryStore::open(data_path(&dir));

    assert!(matches!(outcome, LoadOutcome::Missing));
    assert!(store.is_empty());
    assert!(!data_path(&dir).exists());
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = data_path(&dir);

    let (mut store, _) = InventoryStore::open(&path);
    let kopi = store
        .add_item(NewItem::new("Kopi Bubuk", 5, 1000.0))
        .and_then(AddOutcome::require_added)
        .expect("add kopi");
    let teh = store
        .add_item(NewItem::new("Teh Celup", 2, 5000.0))
        .and_then(AddOutcome::require_added)
        .expect("add teh");
    store
        .edit_item(&teh.id, &ItemPatch::new().name("Teh Melati"))
        .expect("edit teh");
    store.set_stock(&kopi.id, 9).expect("set stock");

    let (reopened, outcome) = InventoryStore::open(&path);
    assert!(matches!(outcome, LoadOutcome::Loaded { count: 2, ref warnings } if warnings.is_empty()));
    assert_eq!(reopened.items(), store.items());
    assert_eq!(reopened.get(&kopi.id).expect("kopi").stock, 9);
    assert!(reopened.find_by_name("teh melati").is_some());
}

#[test]
fn test_merge_on_duplicate_persists_single_record() {
    let dir = tempdir().expect("tempdir");
    let path = data_path(&dir);

    let (mut store, _) = InventoryStore::open(&path);
    store
        .add_item(NewItem::new("Beras", 10, 12000.0))
        .expect("add beras");
    let outcome = store
        .add_item_with(NewItem::new("BERAS", 4, 12000.0), |_| {
            DuplicateDecision::Merge
        })
        .expect("merge beras");
    assert!(matches!(outcome, AddOutcome::Merged(ref change) if change.old == 10 && change.new == 14));

    let raw = fs::read_to_string(&path).expect("read data file");
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw).expect("json array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["stock"], 14);
}

#[test]
fn test_delete_is_persisted() {
    let dir = tempdir().expect("tempdir");
    let path = data_path(&dir);

    let (mut store, _) = InventoryStore::open(&path);
    let item = store
        .add_item(NewItem::new("Sabun", 3, 4000.0))
        .and_then(AddOutcome::require_added)
        .expect("add");
    store.delete_item(&item.id).expect("delete");
    assert!(matches!(
        store.delete_item(&item.id),
        Err(InventoryError::NotFound(_))
    ));

    let (reopened, _) = InventoryStore::open(&path);
    assert!(reopened.is_empty());
    assert!(reopened.find_by_name("sabun").is_none());
}

#[test]
fn test_corrupt_file_reports_failure_and_starts_empty() {
    let dir = tempdir().expect("tempdir");
    let path = data_path(&dir);
    fs::write(&path, "[{\"id\": 1").expect("write corrupt");

    let (store, outcome) = InventoryStore::open(&path);

    assert!(matches!(outcome, LoadOutcome::Failed(InventoryError::Format(_))));
    assert!(store.is_empty());
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        "[{\"id\": 1",
        "a failed load must not rewrite the file"
    );
}

#[test]
fn test_suspicious_records_are_loaded_with_warnings() {
    let dir = tempdir().expect("tempdir");
    let path = data_path(&dir);
    fs::write(
        &path,
        r#"[
  {"id": "ITM1", "name": "Minyak", "stock": -2, "price": 15000.0,
   "created_at": "2024-01-01 08:00:00", "updated_at": "2024-01-02 08:00:00"},
  {"id": "ITM2", "name": "Garam", "stock": 4, "price": 3000}
]"#,
    )
    .expect("write");

    let (store, outcome) = InventoryStore::open(&path);

    match outcome {
        LoadOutcome::Loaded { count, warnings } => {
            assert_eq!(count, 2);
            assert_eq!(
                warnings,
                vec![LoadWarning::NegativeStock {
                    id: "ITM1".to_string(),
                    stock: -2
                }]
            );
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(store.get("ITM1").expect("minyak").stock, -2);
    let garam = store.get("ITM2").expect("garam");
    assert_eq!(garam.updated_at, garam.created_at);
}

#[test]
fn test_export_csv_writes_header_and_rows() {
    let dir = tempdir().expect("tempdir");
    let (mut store, _) = InventoryStore::open(data_path(&dir));
    store
        .add_item(NewItem::new("Kopi", 5, 1000.0))
        .expect("add kopi");
    store
        .add_item(NewItem::new("Teh, Hijau", 2, 5000.0))
        .expect("add teh");

    let target = dir.path().join("out.csv");
    let written = store.export_csv(Some(target.as_path())).expect("export");
    assert_eq!(written, target);

    let text = fs::read_to_string(&target).expect("read csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "ID,Nama,Stok,Harga,Total Nilai,Tanggal Dibuat,Tanggal Diupdate"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains(",Kopi,5,1000,5000,"));
    assert!(lines[2].contains(",\"Teh, Hijau\",2,5000,10000,"));
}

#[test]
fn test_export_to_missing_directory_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let (store, _) = InventoryStore::open(data_path(&dir));
    let target = dir.path().join("no").join("such").join("dir.csv");
    assert!(matches!(
        store.export_csv(Some(target.as_path())),
        Err(InventoryError::Io(_))
    ));
}

#[test]
fn test_summary_matches_listing_totals() {
    let dir = tempdir().expect("tempdir");
    let (mut store, _) = InventoryStore::open(data_path(&dir));
    for (name, stock, price) in [("A", 5, 1000.0), ("B", 2, 5000.0)] {
        store
            .add_item(NewItem::new(name, stock, price))
            .expect("add");
    }

    let summary = store.summary().expect("non-empty");
    let listing = store.list_items();
    assert_eq!(summary.total_stock, listing.total_stock);
    assert_eq!(summary.total_value, listing.total_value);
    assert_eq!(summary.total_stock, 7);
    assert_eq!(summary.total_value, 15000.0);
    assert_eq!(summary.average_value, 7500.0);
    assert_eq!(summary.lowest_stock.name, "A");
    assert_eq!(summary.highest_value.item.name, "B");
}
