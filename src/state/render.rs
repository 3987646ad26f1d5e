// Pure view description of a garden: bounding box, then a row-major walk.
use std::ops::Range;
use std::rc::Rc;

use crate::model::{CellContents, GridModel};
use crate::state::{CellIdentity, CoordinateRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_row: i32,
    pub max_row: i32,
    pub min_column: i32,
    pub max_column: i32,
}

impl BoundingBox {
    /// Smallest box covering every cell in `garden`, or `None` when it is empty.
    pub fn of(garden: &GridModel) -> Option<Self> {
        garden.cells().fold(None, |acc, (cell, _)| {
            let (r, c) = (cell.row(), cell.column());
            Some(match acc {
                None => BoundingBox {
                    min_row: r,
                    max_row: r,
                    min_column: c,
                    max_column: c,
                },
                Some(b) => BoundingBox {
                    min_row: b.min_row.min(r),
                    max_row: b.max_row.max(r),
                    min_column: b.min_column.min(c),
                    max_column: b.max_column.max(c),
                },
            })
        })
    }

    /// Rows walked by the renderer. Upper bound is exclusive, so the last row
    /// of the box is never drawn.
    pub fn rows(&self) -> Range<i32> {
        self.min_row..self.max_row
    }

    /// Columns walked by the renderer, upper bound exclusive.
    pub fn columns(&self) -> Range<i32> {
        self.min_column..self.max_column
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CellSlot {
    /// Position inside the box with no garden entry.
    Outside,
    /// Existing cell, planted or bare.
    Soil(Rc<CellContents>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedCell {
    pub cell: CellIdentity,
    pub slot: CellSlot,
}

impl RenderedCell {
    /// Identity to report when this cell's control is activated. Filler cells
    /// have no control.
    pub fn trigger(&self) -> Option<&CellIdentity> {
        match self.slot {
            CellSlot::Soil(_) => Some(&self.cell),
            CellSlot::Outside => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedRow {
    pub row: i32,
    pub cells: Vec<RenderedCell>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GardenTable {
    pub rows: Vec<RenderedRow>,
}

pub fn render_garden(garden: &GridModel, registry: &CoordinateRegistry) -> GardenTable {
    let Some(bounds) = BoundingBox::of(garden) else {
        return GardenTable::default();
    };
    let rows = bounds
        .rows()
        .map(|row| RenderedRow {
            row,
            cells: bounds
                .columns()
                .map(|column| {
                    let cell = registry.identity_for(row, column);
                    let slot = match garden.get(&cell) {
                        Some(contents) => CellSlot::Soil(contents.clone()),
                        None => CellSlot::Outside,
                    };
                    RenderedCell { cell, slot }
                })
                .collect(),
        })
        .collect();
    GardenTable { rows }
}
