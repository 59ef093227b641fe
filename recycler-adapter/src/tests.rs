use crate::*;

use alloc::vec::Vec;

use recycler::{BindError, Cell, DataSource, Offset, Rect, RecyclerOptions};

#[derive(Debug)]
struct RecordingSource {
    count: usize,
    binds: Vec<(usize, usize)>,
}

impl RecordingSource {
    fn new(count: usize) -> Self {
        Self {
            count,
            binds: Vec::new(),
        }
    }
}

impl DataSource for RecordingSource {
    fn item_count(&self) -> usize {
        self.count
    }

    fn bind(&mut self, cell: &mut Cell, index: usize) -> Result<(), BindError> {
        self.binds.push((cell.slot(), index));
        Ok(())
    }
}

const VIEWPORT: Rect = Rect {
    main: 240.0,
    cross: 240.0,
};
const BLUEPRINT: Rect = Rect {
    main: 20.0,
    cross: 240.0,
};

fn active(count: usize) -> (ViewportAdapter, RecordingSource) {
    let mut adapter = ViewportAdapter::new(RecyclerOptions::default());
    let mut source = RecordingSource::new(count);
    adapter.begin(BLUEPRINT);
    adapter
        .complete_layout(VIEWPORT, 240.0, &mut source)
        .unwrap();
    (adapter, source)
}

#[test]
fn lifecycle_reaches_active_only_after_layout() {
    let mut adapter = ViewportAdapter::new(RecyclerOptions::default());
    let mut source = RecordingSource::new(100);
    assert_eq!(adapter.state(), AdapterState::Uninitialized);
    assert_eq!(adapter.on_scroll_changed(50.0, &mut source), Offset::ZERO);

    adapter.begin(BLUEPRINT);
    assert_eq!(adapter.state(), AdapterState::Initializing);
    // Setup-time layout churn must never reach the pool.
    assert_eq!(adapter.on_scroll_changed(50.0, &mut source), Offset::ZERO);
    assert!(source.binds.is_empty());

    let extent = adapter
        .complete_layout(VIEWPORT, 240.0, &mut source)
        .unwrap();
    assert_eq!(extent, 360.0);
    assert_eq!(adapter.state(), AdapterState::Active);
    assert_eq!(source.binds.len(), 18);
}

#[test]
fn corrections_keep_deltas_consistent() {
    let (mut adapter, mut source) = active(100);
    source.binds.clear();

    // Five cell heights forward: the pool re-homes and the host is told to
    // shift its bookkeeping by the same amount.
    let forward = adapter.on_scroll_changed(100.0, &mut source);
    assert_eq!(forward, Offset { main: -100.0, cross: 0.0 });
    assert_eq!(adapter.recycler().bound_range(), 5..23);
    source.binds.clear();

    // The host applied the correction, so the same visual position now reads
    // as zero; scrolling back five cell heights reads as -100.
    let backward = adapter.on_scroll_changed(-100.0, &mut source);
    assert_eq!(backward, Offset { main: 100.0, cross: 0.0 });
    assert_eq!(
        source.binds,
        alloc::vec![(4, 4), (3, 3), (2, 2), (1, 1), (0, 0)]
    );
    assert_eq!(adapter.recycler().bound_range(), 0..18);
}

#[test]
fn quiet_positions_produce_no_corrections() {
    let (mut adapter, mut source) = active(100);
    source.binds.clear();

    for position in [10.0, 20.0, 30.0] {
        assert_eq!(
            adapter.on_scroll_changed(position, &mut source),
            Offset::ZERO
        );
    }
    assert!(source.binds.is_empty());
}

#[test]
fn rebegin_discards_pool_and_suppresses_until_relayout() {
    let (mut adapter, mut source) = active(100);
    adapter.on_scroll_changed(100.0, &mut source);

    adapter.begin(BLUEPRINT);
    assert_eq!(adapter.state(), AdapterState::Initializing);
    assert!(adapter.recycler().pool().is_empty());
    assert_eq!(adapter.on_scroll_changed(500.0, &mut source), Offset::ZERO);

    let mut rebuilt = RecordingSource::new(40);
    adapter
        .complete_layout(VIEWPORT, 240.0, &mut rebuilt)
        .unwrap();
    assert_eq!(adapter.state(), AdapterState::Active);
    assert_eq!(adapter.recycler().bound_range(), 0..18);
}

#[test]
fn failed_layout_stays_initializing() {
    let mut adapter = ViewportAdapter::new(RecyclerOptions::default());
    let mut source = RecordingSource::new(100);
    adapter.begin(BLUEPRINT);

    assert!(
        adapter
            .complete_layout(Rect::new(0.0, 240.0), 240.0, &mut source)
            .is_err()
    );
    assert_eq!(adapter.state(), AdapterState::Initializing);
    assert_eq!(adapter.on_scroll_changed(50.0, &mut source), Offset::ZERO);

    adapter
        .complete_layout(VIEWPORT, 240.0, &mut source)
        .unwrap();
    assert_eq!(adapter.state(), AdapterState::Active);
}
