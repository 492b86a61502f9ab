use alloc::vec::Vec;
use core::ops::Range;

use crate::{
    Error, FocusFrame, FocusVirtualizer, ItemExtent, RenderWindow, ScrollOffsetPolicy, SizeModel,
    VirtualizerOptions, should_fetch_more,
};

/// Configuration for [`GridLayout`].
#[derive(Clone, Debug)]
pub struct GridOptions {
    pub count: usize,
    /// Items per row. Required and non-zero.
    pub columns: Option<usize>,
    pub item_extent: ItemExtent,
    /// Whether a header occupies logical row 0. Requires `header_extent`.
    pub header: bool,
    pub header_extent: Option<u32>,
}

impl GridOptions {
    pub fn new(count: usize, columns: usize, item_extent: ItemExtent) -> Self {
        Self {
            count,
            columns: Some(columns),
            item_extent,
            header: false,
            header_extent: None,
        }
    }

    pub fn with_columns(mut self, columns: Option<usize>) -> Self {
        self.columns = columns;
        self
    }

    /// Adds a header row with its own extent.
    pub fn with_header(mut self, header_extent: u32) -> Self {
        self.header = true;
        self.header_extent = Some(header_extent);
        self
    }

    pub fn with_header_flag(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_header_extent(mut self, header_extent: Option<u32>) -> Self {
        self.header_extent = header_extent;
        self
    }
}

/// One row of a chunked grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRow {
    pub row_index: usize,
    /// Flat item indexes of the row. Empty for the header row; the last item row may hold fewer
    /// than `columns` items.
    pub items: Range<usize>,
    pub is_header: bool,
}

/// Row-major partition of `count` items into rows of `columns` items, with an optional header
/// row at index 0.
///
/// Rows are treated as list items of their own, so a grid is virtualized by running the list
/// engine over [`GridLayout::row_size_model`].
#[derive(Clone, Debug)]
pub struct GridLayout {
    count: usize,
    columns: usize,
    header_extent: Option<u32>,
    item_extent: ItemExtent,
}

impl GridLayout {
    pub fn new(options: &GridOptions) -> Result<Self, Error> {
        let columns = match options.columns {
            Some(columns) if columns > 0 => columns,
            _ => {
                return Err(Error::InvalidConfiguration(
                    "grid columns must be set and non-zero",
                ));
            }
        };
        match (options.header, options.header_extent) {
            (true, None) => {
                return Err(Error::InvalidConfiguration(
                    "header row requires a header extent",
                ));
            }
            (false, Some(_)) => {
                return Err(Error::InvalidConfiguration(
                    "header extent supplied without a header row",
                ));
            }
            (true, Some(0)) => {
                return Err(Error::InvalidConfiguration("header extent must be non-zero"));
            }
            _ => {}
        }
        options.item_extent.validate()?;

        Ok(Self {
            count: options.count,
            columns,
            header_extent: options.header_extent,
            item_extent: options.item_extent.clone(),
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn has_header(&self) -> bool {
        self.header_extent.is_some()
    }

    pub fn header_extent(&self) -> Option<u32> {
        self.header_extent
    }

    fn header_rows(&self) -> usize {
        usize::from(self.has_header())
    }

    /// `ceil(count / columns)`, plus one with a header.
    pub fn row_count(&self) -> usize {
        self.count.div_ceil(self.columns) + self.header_rows()
    }

    /// Row holding flat index `index` (clamped to the last item).
    pub fn row_of(&self, index: usize) -> usize {
        index.min(self.count.saturating_sub(1)) / self.columns + self.header_rows()
    }

    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// Flat item range of `row`. Empty for the header row and for rows past the end.
    pub fn row_items(&self, row: usize) -> Range<usize> {
        let header_rows = self.header_rows();
        if row < header_rows || row >= self.row_count() {
            return 0..0;
        }
        let start = (row - header_rows) * self.columns;
        let end = start.saturating_add(self.columns).min(self.count);
        start..end
    }

    pub fn row(&self, row: usize) -> Option<GridRow> {
        if row >= self.row_count() {
            return None;
        }
        Some(GridRow {
            row_index: row,
            items: self.row_items(row),
            is_header: row < self.header_rows(),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = GridRow> + '_ {
        (0..self.row_count()).filter_map(|row| self.row(row))
    }

    /// Materializes every row.
    pub fn chunk(&self) -> Vec<GridRow> {
        self.rows().collect()
    }

    /// Extent of `row`: the header extent for the header row, otherwise the tallest item of the
    /// row.
    pub fn row_extent(&self, row: usize) -> u32 {
        if let (true, Some(header_extent)) = (row < self.header_rows(), self.header_extent) {
            return header_extent;
        }
        match &self.item_extent {
            ItemExtent::Fixed(extent) => *extent,
            ItemExtent::Dynamic(_) => self
                .row_items(row)
                .map(|i| self.item_extent.get(i))
                .max()
                .unwrap_or(0),
        }
    }

    /// Rows as list items.
    ///
    /// Stays in fixed mode when every row has the same extent, so jump-on-scroll remains
    /// available for plain grids.
    pub fn row_size_model(&self) -> SizeModel {
        let extent = match (&self.item_extent, self.header_extent) {
            (ItemExtent::Fixed(extent), None) => ItemExtent::Fixed(*extent),
            (ItemExtent::Fixed(extent), Some(header)) if header == *extent => {
                ItemExtent::Fixed(*extent)
            }
            _ => {
                let layout = self.clone();
                ItemExtent::dynamic(move |row| layout.row_extent(row))
            }
        };
        SizeModel::from_validated(self.row_count(), extent)
    }

    /// Flat item range covered by a window of rows.
    pub fn items_in_rows(&self, rows: RenderWindow) -> Range<usize> {
        let header_rows = self.header_rows();
        let first = rows.start.max(header_rows);
        if rows.end <= first {
            return 0..0;
        }
        let start = ((first - header_rows) * self.columns).min(self.count);
        let end = ((rows.end - header_rows) * self.columns).min(self.count);
        start..end
    }
}

/// The output of [`GridVirtualizer`] for one focus or geometry change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridFrame {
    /// Focused flat index, clamped to `0..count`.
    pub focus_index: usize,
    pub focus_row: usize,
    pub focus_column: usize,
    /// The row-level frame: its window and offset are expressed in rows. Its `fetch_more` mirrors
    /// the flat-index value below.
    pub rows: FocusFrame,
    /// Flat items of the windowed rows.
    pub items: Range<usize>,
    pub fetch_more: bool,
}

/// Grid virtualization as a list of rows.
///
/// The flat focus index is mapped to its row, and the row list is windowed and scrolled by a
/// regular [`FocusVirtualizer`]. Pagination is evaluated on flat indexes: the row-level
/// virtualizer runs with a zero fetch threshold and its signal is not used.
#[derive(Clone, Debug)]
pub struct GridVirtualizer {
    layout: GridLayout,
    rows: FocusVirtualizer,
    focus_index: usize,
    fetch_threshold: usize,
}

impl GridVirtualizer {
    /// `list` supplies behavior, viewport, overscan and fetch threshold; its count and item extent
    /// are replaced by the grid's rows.
    pub fn new(grid: GridOptions, list: VirtualizerOptions) -> Result<Self, Error> {
        let layout = GridLayout::new(&grid)?;
        let size = layout.row_size_model();
        let fetch_threshold = list.fetch_threshold;
        let rows = FocusVirtualizer::new(VirtualizerOptions {
            count: size.count(),
            item_extent: size.extent().clone(),
            fetch_threshold: 0,
            ..list
        })?;
        Ok(Self {
            layout,
            rows,
            focus_index: 0,
            fetch_threshold,
        })
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The row-level virtualizer.
    pub fn rows(&self) -> &FocusVirtualizer {
        &self.rows
    }

    /// Replaces the grid layout (e.g. after more data arrived or the column count changed).
    ///
    /// The row geometry and the focused row are applied in one update, so `on_change` fires once.
    /// On error nothing changes.
    pub fn set_grid(&mut self, grid: GridOptions) -> Result<(), Error> {
        let layout = GridLayout::new(&grid)?;
        let size = layout.row_size_model();
        ScrollOffsetPolicy::validate(self.rows.behavior(), size.extent())?;
        let focus_row = layout.row_of(self.focus_index);

        let mut result = Ok(());
        self.rows.batch_update(|rows| {
            result = rows.update_options(|o| {
                o.count = size.count();
                o.item_extent = size.extent().clone();
            });
            if result.is_ok() {
                rows.set_focus_index(focus_row);
            }
        });
        result?;
        self.layout = layout;
        Ok(())
    }

    pub fn fetch_threshold(&self) -> usize {
        self.fetch_threshold
    }

    pub fn set_fetch_threshold(&mut self, fetch_threshold: usize) -> GridFrame {
        self.fetch_threshold = fetch_threshold;
        self.frame()
    }

    pub fn set_viewport_extent(&mut self, viewport_extent: u32) -> GridFrame {
        self.rows.set_viewport_extent(viewport_extent);
        self.frame()
    }

    pub fn set_focus_index(&mut self, index: usize) -> GridFrame {
        self.focus_index = index;
        self.rows.set_focus_index(self.layout.row_of(index));
        self.frame()
    }

    pub fn frame(&self) -> GridFrame {
        let count = self.layout.count();
        let focus_index = self.focus_index.min(count.saturating_sub(1));
        let fetch_more = should_fetch_more(focus_index, count, self.fetch_threshold);
        let rows = FocusFrame {
            fetch_more,
            ..self.rows.frame()
        };
        GridFrame {
            focus_index,
            focus_row: self.layout.row_of(focus_index),
            focus_column: self.layout.column_of(focus_index),
            items: self.layout.items_in_rows(rows.window),
            fetch_more,
            rows,
        }
    }
}
