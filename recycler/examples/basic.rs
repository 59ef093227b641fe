// Example: minimal pooled list driven by raw scroll deltas.
use recycler::{BindError, Cell, DataSource, Rect, Recycler, RecyclerOptions};

struct Rows(usize);

impl DataSource for Rows {
    fn item_count(&self) -> usize {
        self.0
    }

    fn bind(&mut self, cell: &mut Cell, index: usize) -> Result<(), BindError> {
        println!("bind slot {} -> row {}", cell.slot(), index);
        Ok(())
    }
}

fn main() {
    let mut rows = Rows(1_000_000);
    let mut r = Recycler::new(RecyclerOptions::default());

    // Phase one: record the blueprint. Phase two: once layout has settled,
    // build the pool against the real rectangles.
    r.begin(Rect::new(2.0, 40.0));
    let extent = r
        .complete(Rect::new(24.0, 40.0), 40.0, &mut rows)
        .expect("valid geometry");
    println!("pool={} content_extent={}", r.pool().len(), extent);

    // A five-row jump: the engine rebinds five cells and reports the shift the
    // host must fold into its scroll bookkeeping.
    let correction = r.on_scroll(10.0, &mut rows);
    println!("correction={correction:?}");
    println!("window={:?} bound_range={:?}", r.window(), r.bound_range());
}
