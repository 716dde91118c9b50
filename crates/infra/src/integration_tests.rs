//! Integration tests for the full file-backed interaction cycle.
//!
//! Tests: load → mutate → save → reload against a real CSV file.
//!
//! Verifies:
//! - A missing file behaves as an empty inventory
//! - Add/update/delete survive a reload with order preserved
//! - An untouched table round-trips byte-for-byte

#[cfg(test)]
mod tests {
    use weldstock_inventory::{Category, NewRecord};

    use crate::session::InventorySession;
    use crate::store::{CsvTableStore, Schema, TableStore};

    fn setup() -> (tempfile::TempDir, CsvTableStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvTableStore::new(dir.path().join("inventario_soldaduras.csv"), Schema::Categorized);
        (dir, store)
    }

    fn add(store: &CsvTableStore, new: NewRecord) {
        let mut session = InventorySession::begin(store).unwrap();
        session.table_mut().add(new).unwrap();
        session.commit().unwrap();
    }

    #[test]
    fn full_cycle_against_csv_file() {
        let (_dir, store) = setup();

        add(&store, NewRecord::new("Rod A", 10, 2.50).with_category(Category::Electrodes));
        add(&store, NewRecord::new("Helmet", 2, 45.0).with_category(Category::Safety));
        add(&store, NewRecord::new("Rod A", 5, 2.50).with_category(Category::Electrodes));
        add(&store, NewRecord::new("Grinder", 1, 120.0).with_category(Category::Tools));

        let table = store.load().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.aggregate().total_value, 10.0 * 2.5 + 2.0 * 45.0 + 5.0 * 2.5 + 120.0);

        let mut session = InventorySession::begin(&store).unwrap();
        assert_eq!(session.table_mut().update("Rod A", 7, 3.00).unwrap(), 2);
        session.commit().unwrap();

        let table = store.load().unwrap();
        let rods: Vec<_> = table.records().iter().filter(|r| r.product == "Rod A").collect();
        assert!(rods.iter().all(|r| r.quantity == 7 && r.price == 3.0));
        assert_eq!(table.first_match("Helmet").unwrap().quantity, 2);

        let mut session = InventorySession::begin(&store).unwrap();
        assert_eq!(session.table_mut().delete("Rod A").unwrap(), 2);
        let committed = session.commit().unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, committed);
        assert_eq!(reloaded.product_names(), vec!["Helmet", "Grinder"]);
    }

    #[test]
    fn failed_validation_leaves_file_untouched() {
        let (_dir, store) = setup();
        add(&store, NewRecord::new("Rod A", 10, 2.50));
        let before = std::fs::read(store.path()).unwrap();

        let mut session = InventorySession::begin(&store).unwrap();
        assert!(session.table_mut().add(NewRecord::new("  ", 1, 1.0)).is_err());
        drop(session);

        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn unmodified_table_round_trips_byte_for_byte() {
        let (_dir, store) = setup();
        std::fs::write(
            store.path(),
            "Producto,Cantidad,Precio,Categoria\nRod A,10,2.5,Electrodos\nGloves,20,3.0,Seguridad\nMisc,1,0.0,\n",
        )
        .unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let table = store.load().unwrap();
        store.save(&table).unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn search_after_reload_is_case_insensitive() {
        let (_dir, store) = setup();
        add(&store, NewRecord::new("Rod A", 10, 2.50));
        add(&store, NewRecord::new("Helmet", 2, 45.0));

        let table = store.load().unwrap();
        let hits = table.list(Some("rod"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product, "Rod A");
    }
}
