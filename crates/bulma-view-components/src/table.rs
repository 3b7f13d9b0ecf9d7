//! Data tables
//!
//! Parents render tables through [`render_table`], which resolves `Table`
//! by name so an application can register `"<Namespace>::Table"` to
//! replace it in one part of the site.

use crate::theme::Classes;
use bulma_view_core::{
    Component, Markup, OptionDef, Options, Props, Render, RenderContext, Result, Rule, Schema,
    Shape, Value,
};
use maud::html;
use std::sync::OnceLock;

const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

fn column_rule() -> Rule {
    Rule::array(Rule::predicate(|value, label| {
        let has = |field: &str| value.get(field).is_some_and(Value::is_string);
        (!(value.is_object() && has("key") && has("label")))
            .then(|| format!("{label} must be an Object with a key and a label"))
    }))
}

/// A column: the row field it reads and its header text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub key: &'a str,
    pub label: &'a str,
}

#[derive(Debug)]
pub struct Table {
    props: Props,
}

impl Table {
    pub const NAME: &'static str = "Table";

    pub fn columns(&self) -> Vec<Column<'_>> {
        self.props
            .array("columns")
            .iter()
            .filter_map(|column| {
                Some(Column {
                    key: column.get("key")?.as_str()?,
                    label: column.get("label")?.as_str()?,
                })
            })
            .collect()
    }
}

/// Text of one cell: strings verbatim, `null` or missing as empty, the rest as JSON
fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

impl Component for Table {
    fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::builder(Self::NAME)
                .option(OptionDef::new("columns").required().validate(column_rule()))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("rows")
                            .default(Value::Array(Vec::new()))
                            .validate(Rule::array(Shape::Object.into())),
                    )
                })
                .and_then(|b| b.option(OptionDef::flag("striped")))
                .and_then(|b| b.option(OptionDef::flag("hoverable")))
                .and_then(|b| b.option(OptionDef::flag("fullwidth")))
                .and_then(|b| {
                    b.option(
                        OptionDef::new("empty_message")
                            .default(DEFAULT_EMPTY_MESSAGE)
                            .validate(Shape::String),
                    )
                })
                .and_then(|b| b.build())
                .expect("Table schema")
        })
    }

    fn from_props(props: Props) -> Self {
        Self { props }
    }
}

impl Render for Table {
    fn render(&self, _ctx: &RenderContext<'_>) -> Result<Markup> {
        let class = Classes::new("table")
            .flag(self.props.flag("striped"), "is-striped")
            .flag(self.props.flag("hoverable"), "is-hoverable")
            .flag(self.props.flag("fullwidth"), "is-fullwidth")
            .build();
        let columns = self.columns();
        let rows = self.props.array("rows");

        Ok(html! {
            table class=(class) {
                thead {
                    tr { @for column in &columns { th { (column.label) } } }
                }
                tbody {
                    @if rows.is_empty() {
                        tr {
                            td colspan=(columns.len()) {
                                (self.props.str("empty_message").unwrap_or(DEFAULT_EMPTY_MESSAGE))
                            }
                        }
                    }
                    @for row in rows {
                        tr { @for column in &columns { td { (cell_text(row, column.key)) } } }
                    }
                }
            }
        })
    }
}

/// Render the table registered for the context's namespace
pub fn render_table(ctx: &RenderContext<'_>, options: Options) -> Result<Markup> {
    ctx.render_named(Table::NAME, options, None)
}
