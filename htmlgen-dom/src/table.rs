//! Tables.
//!
//! A [`Table`] keeps an implicit head and body section. Rows created through
//! [`Table::create_header_row`] and [`Table::create_row`] land there and are
//! rendered before any other child:
//!
//! ```
//! use htmlgen::{GeneratorExt, HtmlElement};
//! use htmlgen_dom::Table;
//!
//! let mut table = Table::new();
//! table.create_simple_header_row(["Name", "Qty"]);
//! let row = table.create_simple_row(["Apples", "3"]);
//! row.borrow_mut().set_id(Some("apples")).unwrap();
//! assert_eq!(
//!     table.render(),
//!     concat!(
//!         "<table><thead><tr><th>Name</th><th>Qty</th></tr></thead>",
//!         r#"<tbody><tr id="apples"><td>Apples</td><td>3</td></tr></tbody></table>"#,
//!     ),
//! );
//! ```

use std::fmt;

use htmlgen::{Attribute, Element, Generator, HtmlElement, Item, Items, Node, Shared, VoidElement};

use crate::macros::append_shared;

/// A `<table>`.
#[derive(Clone)]
pub struct Table {
    element: Element,
    head: TableHead,
    body: TableBody,
    header_rows: Option<Node>,
    rows: Option<Node>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            element: Element::new("table"),
            head: TableHead::new(),
            body: TableBody::new(),
            header_rows: None,
            rows: None,
        }
    }

    /// Appends an explicit `<thead>` and returns it.
    pub fn create_head(&mut self) -> Shared<TableHead> {
        append_shared(&mut self.element, TableHead::new())
    }

    /// Appends an explicit `<tbody>` and returns it.
    pub fn create_body(&mut self) -> Shared<TableBody> {
        append_shared(&mut self.element, TableBody::new())
    }

    /// Adds a row to the implicit head section and returns it.
    pub fn create_header_row(&mut self) -> Shared<TableRow> {
        self.head.create_row()
    }

    /// Adds a row to the implicit body section and returns it.
    pub fn create_row(&mut self) -> Shared<TableRow> {
        self.body.create_row()
    }

    /// Appends a row to the implicit head section.
    pub fn append_header_row(&mut self, row: impl Into<Item>) {
        self.head.append(row);
    }

    /// Appends a row to the implicit body section.
    pub fn append_row(&mut self, row: impl Into<Item>) {
        self.body.append(row);
    }

    /// Adds a head row with one `<th>` per text.
    pub fn create_simple_header_row<I>(&mut self, headers: I) -> Shared<TableRow>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let row = self.create_header_row();
        row.borrow_mut().create_header_cells(headers);
        row
    }

    /// Adds a body row with one `<td>` per text.
    pub fn create_simple_row<I>(&mut self, cells: I) -> Shared<TableRow>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let row = self.create_row();
        row.borrow_mut().create_cells(cells);
        row
    }

    /// Computes extra head rows on every render.
    ///
    /// The generator's items are collected into a fresh `<thead>`, which is
    /// omitted when empty.
    pub fn set_header_rows(&mut self, rows: impl Generator + 'static) {
        self.header_rows = Some(std::rc::Rc::new(rows));
    }

    /// Computes extra body rows on every render, see
    /// [`set_header_rows`](Self::set_header_rows).
    pub fn set_rows(&mut self, rows: impl Generator + 'static) {
        self.rows = Some(std::rc::Rc::new(rows));
    }

    /// Implicit head, generated head, implicit body, generated body, then the
    /// remaining children.
    pub fn generate_children(&self) -> Items {
        let mut sections: Vec<Item> = Vec::with_capacity(4);
        if !self.head.is_empty() {
            sections.push(self.head.clone().into());
        }
        if let Some(rows) = &self.header_rows {
            let mut head = TableHead::new();
            head.extend(rows.generate());
            if !head.is_empty() {
                sections.push(head.into());
            }
        }
        if !self.body.is_empty() {
            sections.push(self.body.clone().into());
        }
        if let Some(rows) = &self.rows {
            let mut body = TableBody::new();
            body.extend(rows.generate());
            if !body.is_empty() {
                sections.push(body.into());
            }
        }
        Box::new(sections.into_iter().chain(self.element.generate_children()))
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("element", &self.element)
            .field("head", &self.head)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

element_type!(Table, generate = generate_children);

container!(
    /// A `<thead>` section.
    TableHead,
    "thead"
);

container!(
    /// A `<tbody>` section.
    TableBody,
    "tbody"
);

impl TableHead {
    /// Appends an empty row and returns it.
    pub fn create_row(&mut self) -> Shared<TableRow> {
        append_shared(self, TableRow::new())
    }
}

impl TableBody {
    /// Appends an empty row and returns it.
    pub fn create_row(&mut self) -> Shared<TableRow> {
        append_shared(self, TableRow::new())
    }
}

container!(
    /// A `<tr>` row.
    TableRow,
    "tr"
);

impl TableRow {
    /// Appends a `<td>` holding `content` and returns it.
    pub fn create_cell(&mut self, content: impl Into<Item>) -> Shared<TableCell> {
        append_shared(self, TableCell::with_content([content]))
    }

    /// Appends one `<td>` per child.
    pub fn create_cells<I>(&mut self, content: I) -> Vec<Shared<TableCell>>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        content.into_iter().map(|c| self.create_cell(c)).collect()
    }

    /// Appends a `<th>` holding `content` and returns it.
    pub fn create_header_cell(&mut self, content: impl Into<Item>) -> Shared<TableHeaderCell> {
        append_shared(self, TableHeaderCell::with_content([content]))
    }

    /// Appends one `<th>` per child.
    pub fn create_header_cells<I>(&mut self, content: I) -> Vec<Shared<TableHeaderCell>>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        content
            .into_iter()
            .map(|c| self.create_header_cell(c))
            .collect()
    }
}

const ROW_SPAN: Attribute<u32> = Attribute::with_default("rowspan", 1);
const COLUMN_SPAN: Attribute<u32> = Attribute::with_default("colspan", 1);

macro_rules! cell_spans {
    ($name:ident) => {
        impl $name {
            /// How many rows the cell spans, 1 unless set.
            pub fn rows(&self) -> Option<u32> {
                self.get(&ROW_SPAN)
            }

            /// Sets the row span; 1 removes the attribute.
            pub fn set_rows(&mut self, rows: u32) {
                self.set(&ROW_SPAN, Some(rows));
            }

            /// How many columns the cell spans, 1 unless set.
            pub fn columns(&self) -> Option<u32> {
                self.get(&COLUMN_SPAN)
            }

            /// Sets the column span; 1 removes the attribute.
            pub fn set_columns(&mut self, columns: u32) {
                self.set(&COLUMN_SPAN, Some(columns));
            }
        }
    };
}

container!(
    /// A `<td>` data cell.
    TableCell,
    "td"
);

cell_spans!(TableCell);

container!(
    /// A `<th>` header cell.
    TableHeaderCell,
    "th"
);

cell_spans!(TableHeaderCell);

container!(
    /// A `<colgroup>` of [`Column`]s.
    ColumnGroup,
    "colgroup"
);

impl ColumnGroup {
    /// Appends a column and returns it.
    pub fn create_column(&mut self) -> Shared<Column> {
        append_shared(self, Column::new())
    }

    /// Appends one column per CSS class.
    pub fn create_columns_with_classes<I>(&mut self, classes: I) -> Vec<Shared<Column>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        classes
            .into_iter()
            .map(|class| {
                let column = self.create_column();
                column.borrow_mut().add_css_class(class);
                column
            })
            .collect()
    }
}

/// A `<col/>` inside a [`ColumnGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    element: VoidElement,
}

impl Column {
    /// Creates a column.
    pub fn new() -> Self {
        Self {
            element: VoidElement::new("col"),
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

void_element_type!(Column);
