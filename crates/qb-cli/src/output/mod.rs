use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Acknowledgement printed after a delete.
#[derive(Debug, Serialize)]
pub struct Deleted<'a> {
    pub entity: &'static str,
    pub id: &'a str,
    pub deleted: usize,
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) if is_sectioned(&map) => Ok(render_sections(map)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render(&headers, &rows, table_options()))
        }
    }
}

/// An object whose every list field holds records, such as a job board.
fn is_sectioned(map: &Map<String, Value>) -> bool {
    let mut lists = map.values().filter_map(Value::as_array).peekable();
    lists.peek().is_some()
        && map.values().all(|v| v.is_array() || !v.is_object())
        && lists.all(|items| items.iter().all(Value::is_object))
}

fn render_sections(map: Map<String, Value>) -> String {
    let mut sections = Vec::new();
    let mut scalars = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) => {
                sections.push(format!("{key} ({})\n{}", items.len(), render_array_table(&items)));
            }
            other => scalars.push(format!("{key}: {}", value_to_cell(&other))),
        }
    }
    sections.extend(scalars);
    sections.join("\n\n")
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render(&headers, &rows, table_options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    headers.sort();
    if let Some(pos) = headers.iter().position(|h| h == "id") {
        let id = headers.remove(pos);
        headers.insert(0, id);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{Deleted, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        company: &'static str,
        tags: Vec<&'static str>,
    }

    #[derive(Serialize)]
    struct Board {
        active: Vec<Row>,
        archived: Vec<Row>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Deleted {
            entity: "job",
            id: "job-1",
            deleted: 1,
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["entity"], "job");
        assert_eq!(parsed["deleted"], 1);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Deleted {
            entity: "question",
            id: "q-1",
            deleted: 1,
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn array_columns_start_with_id() {
        let rows = vec![Row {
            id: "job-1",
            company: "Acme",
            tags: vec!["remote", "rust"],
        }];
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let id_at = header.find("id").expect("id column");
        let company_at = header.find("company").expect("company column");
        assert!(id_at < company_at);
        assert!(out.contains("remote, rust"));
    }

    #[test]
    fn record_lists_render_as_sections() {
        let board = Board {
            active: vec![Row {
                id: "job-1",
                company: "Acme",
                tags: vec![],
            }],
            archived: vec![],
        };
        let out = render(&board, OutputFormat::Table).expect("table render should work");
        assert!(out.contains("active (1)"));
        assert!(out.contains("archived (0)"));
        assert!(out.contains("(no rows)"));
    }

    #[test]
    fn plain_object_renders_key_value_rows() {
        let value = Deleted {
            entity: "category",
            id: "cat-1",
            deleted: 3,
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("cat-1"));
    }
}
