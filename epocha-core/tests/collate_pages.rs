use epocha_core::{
    Epoch, EpochaError, PageCursor, Record, SamplePage, collate_pages, detect_epochs,
};

fn page(rows: &[(i64, &[(&str, i64)])], next: Option<&str>) -> SamplePage<i64, i64> {
    SamplePage {
        records: rows
            .iter()
            .map(|(ts, vals)| Record::new(*ts, vals.iter().map(|(k, v)| (*k, *v))))
            .collect(),
        next: next.map(|c| PageCursor(c.to_string())),
    }
}

#[test]
fn concatenates_pages_in_order_and_selects_channel() {
    let p1 = page(
        &[(1, &[("gps", 1), ("seismic", 0)]), (2, &[("gps", 1), ("seismic", 1)])],
        Some("p2"),
    );
    let p2 = page(&[(3, &[("gps", 0)]), (4, &[("gps", 1), ("seismic", 1)])], None);

    let seq = collate_pages([p1.clone(), p2.clone()], "gps").unwrap();
    let ts: Vec<i64> = seq.samples().iter().map(|s| s.ts).collect();
    assert_eq!(ts, vec![1, 2, 3, 4]);

    // Record 3 has no seismic value: skipped, not filled in.
    let seismic = collate_pages([p1, p2], "seismic").unwrap();
    let ts: Vec<i64> = seismic.samples().iter().map(|s| s.ts).collect();
    assert_eq!(ts, vec![1, 2, 4]);
    assert_eq!(
        detect_epochs(seismic.samples(), &1).unwrap(),
        vec![Epoch::new(2, 4).unwrap()]
    );
}

#[test]
fn rejects_out_of_order_page_seam() {
    let p1 = page(&[(5, &[("gps", 1)]), (6, &[("gps", 1)])], Some("p2"));
    let p2 = page(&[(4, &[("gps", 0)])], None);
    let err = collate_pages([p1, p2], "gps").unwrap_err();
    assert!(err.is_invalid_input(), "{err:?}");
}

#[test]
fn missing_channel_everywhere_is_invalid() {
    let p1 = page(&[(1, &[("gps", 1)])], None);
    match collate_pages([p1], "radar") {
        Err(EpochaError::InvalidInput(m)) => assert!(m.contains("radar")),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn sequence_epochs_match_free_function() {
    let p1 = page(&[(1, &[("gps", 0)]), (2, &[("gps", 1)]), (3, &[("gps", 1)])], None);
    let seq = collate_pages([p1], "gps").unwrap();
    assert_eq!(
        seq.epochs(&1).unwrap(),
        detect_epochs(seq.samples(), &1).unwrap()
    );
}
