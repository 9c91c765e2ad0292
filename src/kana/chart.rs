use serde::Serialize;

use super::{
    inventory::{
        find,
        youon_rows,
        COL_ORDER,
        DAKUTEN_ROW_ORDER,
        HANDAKUTEN_ROW_ORDER,
        ROW_ORDER,
        YOUON_COL_ORDER,
    },
    types::{
        Col,
        KanaItem,
        Row,
        Script,
    },
};

#[derive(Debug, Clone, Serialize)]
pub struct ChartRow {
    pub row: Row,
    pub cells: Vec<Option<&'static KanaItem>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSection {
    pub cols: Vec<Col>,
    pub rows: Vec<ChartRow>,
}

impl ChartSection {
    fn build(script: Script, rows: impl IntoIterator<Item = Row>, cols: &[Col]) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| ChartRow {
                row,
                cells: cols.iter().map(|col| find(script, row, *col)).collect(),
            })
            .collect();

        Self { cols: cols.to_vec(), rows }
    }

    pub fn items(&self) -> impl Iterator<Item = &'static KanaItem> + '_ {
        self.rows.iter().flat_map(|r| r.cells.iter().flatten().copied())
    }
}

/// Review table for one script, laid out like a printed kana chart.
#[derive(Debug, Clone, Serialize)]
pub struct KanaChart {
    pub script: Script,
    pub basic: ChartSection,
    pub nasal: Option<&'static KanaItem>,
    pub voiced: ChartSection,
    pub youon: ChartSection,
}

impl KanaChart {
    pub fn for_script(script: Script) -> Self {
        let voiced_rows = DAKUTEN_ROW_ORDER.iter().chain(HANDAKUTEN_ROW_ORDER.iter()).copied();

        Self {
            script,
            basic: ChartSection::build(script, ROW_ORDER, &COL_ORDER),
            nasal: find(script, Row::Special, Col::N),
            voiced: ChartSection::build(script, voiced_rows, &COL_ORDER),
            youon: ChartSection::build(script, youon_rows(), &YOUON_COL_ORDER),
        }
    }
}
