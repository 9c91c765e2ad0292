pub mod chart;
pub mod inventory;
pub mod types;

pub use chart::KanaChart;
pub use inventory::{
    find,
    find_kana,
    items_for_script,
    kana_items,
};
pub use types::{
    Col,
    KanaItem,
    KanaTag,
    Row,
    Script,
};
