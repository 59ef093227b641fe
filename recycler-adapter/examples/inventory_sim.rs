// Example: a pooled inventory list in the style of a game UI. JSON item data,
// a scripted scroll session, row selection, and an info panel.
use recycler::{BindError, Cell, DataSource, Rect, RecyclerOptions};
use recycler_adapter::{AdapterState, ViewportAdapter};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
struct ItemData {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Stat")]
    stat: i64,
    #[serde(rename = "IconIndex")]
    icon_index: usize,
}

const ITEM_JSON: &str = r#"[
  {"Name": "Sword", "Description": "A trusty blade.", "Stat": 7, "IconIndex": 0},
  {"Name": "Shield", "Description": "Blocks most things.", "Stat": 5, "IconIndex": 1},
  {"Name": "Potion", "Description": "Restores vigor.", "Stat": 2, "IconIndex": 2},
  {"Name": "Ring", "Description": "Faintly magical.", "Stat": 9, "IconIndex": 3}
]"#;

const ICONS: &[&str] = &["[sword]", "[shield]", "[potion]", "[ring]"];

/// Concats `scale` copies of the parsed array to simulate a large data set.
fn generate_items(json: &str, scale: usize) -> serde_json::Result<Vec<ItemData>> {
    let parsed: Vec<ItemData> = serde_json::from_str(json)?;
    let mut items = Vec::with_capacity(parsed.len() * scale);
    for _ in 0..scale {
        items.extend(parsed.iter().cloned());
    }
    Ok(items)
}

struct Inventory {
    items: Vec<ItemData>,
    labels: Vec<String>,
    selected: Option<usize>,
}

impl Inventory {
    fn info_panel(&self, index: usize) -> String {
        let item = &self.items[index];
        format!(
            "{} {}: {} (stat {})",
            ICONS[item.icon_index], item.name, item.description, item.stat
        )
    }
}

impl DataSource for Inventory {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn bind(&mut self, cell: &mut Cell, index: usize) -> Result<(), BindError> {
        let item = self
            .items
            .get(index)
            .ok_or_else(|| BindError::new("no item record"))?;
        if self.labels.len() <= cell.slot() {
            self.labels.resize(cell.slot() + 1, String::new());
        }
        self.labels[cell.slot()] = format!("{} {}", ICONS[item.icon_index], item.name);
        Ok(())
    }
}

/// Prints the rows currently on screen, with the selected one marked.
fn render(adapter: &ViewportAdapter, inventory: &Inventory) {
    let r = adapter.recycler();
    let position = r.content_position();
    let viewport = r.viewport().main;
    let w = r.window();
    let len = r.pool().len();
    for step in 0..len {
        let slot = (w.top_slot + step) % len;
        let cell = &r.pool()[slot];
        let top = cell.origin() - position;
        if top + cell.size().main <= 0.0 || top >= viewport {
            continue;
        }
        let marker = if r.bound_index_of_slot(slot) == inventory.selected {
            ">"
        } else {
            " "
        };
        println!("{marker} {top:>6.1} {}", inventory.labels[slot]);
    }
}

fn first_visible_index(adapter: &ViewportAdapter) -> Option<usize> {
    let r = adapter.recycler();
    let position = r.content_position();
    r.pool()
        .iter()
        .filter(|cell| cell.end() - position > 0.0)
        .min_by(|a, b| a.origin().total_cmp(&b.origin()))
        .and_then(|cell| r.bound_index_of_slot(cell.slot()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut inventory = Inventory {
        items: generate_items(ITEM_JSON, 10)?,
        labels: Vec::new(),
        selected: None,
    };

    let mut adapter = ViewportAdapter::new(RecyclerOptions::default());
    adapter.begin(Rect::new(24.0, 320.0));
    // The host's rendering pass has settled; rectangles are now real.
    let extent = adapter.complete_layout(Rect::new(480.0, 320.0), 320.0, &mut inventory)?;
    assert_eq!(adapter.state(), AdapterState::Active);
    println!(
        "pool={} content_extent={} items={}",
        adapter.recycler().pool().len(),
        extent,
        inventory.items.len()
    );

    // Select the first row on startup, like a freshly opened inventory screen.
    inventory.selected = first_visible_index(&adapter);
    if let Some(index) = inventory.selected {
        println!("info: {}", inventory.info_panel(index));
    }
    render(&adapter, &inventory);

    // A scripted scroll session; the host folds each correction back into its
    // own position before reporting the next one.
    let mut position = 0.0f32;
    for user_delta in [48.0, 72.0, 120.0, -240.0] {
        position += user_delta;
        let correction = adapter.on_scroll_changed(position, &mut inventory);
        position += correction.main;
        println!(
            "scrolled {user_delta:+} -> correction {:+}, rows {:?}",
            correction.main,
            adapter.recycler().bound_range()
        );
    }

    // Clicking the topmost visible row updates the selection and info panel.
    inventory.selected = first_visible_index(&adapter);
    if let Some(index) = inventory.selected {
        println!("info: {}", inventory.info_panel(index));
    }
    render(&adapter, &inventory);

    Ok(())
}
