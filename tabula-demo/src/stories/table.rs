use std::cell::Cell;

use log::info;
use tabula_lib::model::Record;
use tabula_lib::table::{
    Alignment, Column, ColumnWidth, DataTable, PageDescriptor, RowIdentity, RowKey,
    SelectionMode, TableOptions, TableViewState,
};

use crate::catalog::{Story, StoryContext};
use crate::error::DemoError;
use crate::render;

inventory::submit! {
    Story::new("table/default", "Three people, sorted by name", default)
}

inventory::submit! {
    Story::new("table/empty", "No rows", empty)
}

inventory::submit! {
    Story::new("table/large-data", "Twenty users sorted by age, descending", large_data)
}

inventory::submit! {
    Story::new("table/selection", "Multiple selection by id", selection)
}

inventory::submit! {
    Story::new("table/paged", "Twenty users, first page then the next", paged)
}

fn sample_rows() -> Vec<Record> {
    vec![
        Record::new()
            .set("id", 1)
            .set("name", "John Doe")
            .set("age", 25)
            .set("role", "Developer"),
        Record::new()
            .set("id", 2)
            .set("name", "Jane Smith")
            .set("age", 30)
            .set("role", "Designer"),
        Record::new()
            .set("id", 3)
            .set("name", "Sam Wilson")
            .set("age", 28)
            .set("role", "Product Manager"),
    ]
}

fn generated_rows(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new()
                .set("id", (i + 1) as i64)
                .set("name", format!("User {}", i + 1))
                .set("age", 20 + (i % 10) as i64)
                .set("role", if i % 2 == 0 { "Developer" } else { "Designer" })
        })
        .collect()
}

fn sample_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable().align(Alignment::Right),
        Column::new("name", "Name").sortable(),
        Column::new("age", "Age").sortable().align(Alignment::Right),
        Column::new("role", "Role").width(ColumnWidth::Fixed(12)),
    ]
}

fn options(cx: &StoryContext) -> TableOptions {
    let options = TableOptions::new().row_key(RowIdentity::field("id"));
    match &cx.empty_text {
        Some(text) => options.empty_text(text.clone()),
        None => options,
    }
}

fn default(cx: &StoryContext) -> Result<String, DemoError> {
    let rows = sample_rows();
    let columns = sample_columns();
    let mut state = TableViewState::new();
    let mut table = DataTable::new(&rows, &columns).with_options(options(cx));

    table.toggle_sort(&mut state, "name");
    Ok(render::table(&table, &state))
}

fn empty(cx: &StoryContext) -> Result<String, DemoError> {
    let columns = sample_columns();
    let table = DataTable::new(&[], &columns).with_options(options(cx));
    Ok(render::table(&table, &TableViewState::new()))
}

fn large_data(cx: &StoryContext) -> Result<String, DemoError> {
    let rows = generated_rows(20);
    let columns = sample_columns();
    let mut state = TableViewState::new();
    let mut table = DataTable::new(&rows, &columns).with_options(options(cx));

    table.toggle_sort(&mut state, "age");
    table.toggle_sort(&mut state, "age");
    Ok(render::table(&table, &state))
}

fn selection(cx: &StoryContext) -> Result<String, DemoError> {
    let rows = sample_rows();
    let columns = sample_columns();
    let mut state = TableViewState::new();
    let mut table = DataTable::new(&rows, &columns)
        .with_options(options(cx).selection(SelectionMode::Multiple))
        .on_row_select(|keys| info!("Selection changed: {} row(s)", keys.len()));

    table.toggle_row(&mut state, &RowKey::from("1"), true);
    table.toggle_row(&mut state, &RowKey::from("3"), true);
    table.toggle_sort(&mut state, "age");

    let names: Vec<String> = table
        .selected_rows(&state)
        .iter()
        .map(|record| {
            record
                .get_string("name")
                .ok()
                .flatten()
                .unwrap_or_default()
                .to_string()
        })
        .collect();

    Ok(format!(
        "{}\n\nSelected: {}",
        render::table(&table, &state),
        names.join(", ")
    ))
}

fn paged(cx: &StoryContext) -> Result<String, DemoError> {
    let rows = generated_rows(20);
    let columns = sample_columns();
    let state = TableViewState::new();
    let requested = Cell::new(None);

    let mut table = DataTable::new(&rows, &columns)
        .with_options(options(cx).page_size(cx.page_size))
        .with_page(PageDescriptor::first(cx.page_size, rows.len()))
        .on_page_change(|page, size| {
            info!("Page change requested: page={} size={}", page, size);
            requested.set(Some(PageDescriptor::new(page, size, rows.len())));
        });
    let first = render::table(&table, &state);
    table.next_page();
    drop(table);

    let Some(next) = requested.get() else {
        return Ok(first);
    };
    let table = DataTable::new(&rows, &columns)
        .with_options(options(cx).page_size(next.page_size))
        .with_page(next);
    Ok(format!(
        "{}\n\nAfter Next ›\n\n{}",
        first,
        render::table(&table, &state)
    ))
}
