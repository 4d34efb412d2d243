use super::config::TableConfig;
use super::records::TrainRecord;

const HEADERS: [&str; 3] = ["Destination", "Train number", "Departure time"];

/// Renders records as a boxed table with centred cells, one separator line between rows.
pub fn render<'a>(records: impl IntoIterator<Item = &'a TrainRecord>, config: &TableConfig) -> String {
    let widths = [config.destination_width, config.number_width, config.time_width];
    let line = separator(&widths);

    let mut out = String::new();
    out.push_str(&line);
    push_row(&mut out, HEADERS, &widths);
    for record in records {
        out.push_str(&line);
        push_row(
            &mut out,
            [record.destination(), record.train_number(), record.departure_time()],
            &widths,
        );
    }
    out.push_str(&line);
    out
}

fn separator(widths: &[usize; 3]) -> String {
    let dashes: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    format!("+-{}-+\n", dashes.join("-+-"))
}

fn push_row(out: &mut String, cells: [&str; 3], widths: &[usize; 3]) {
    out.push_str(&format!(
        "| {:^w0$} | {:^w1$} | {:^w2$} |\n",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrow() -> TableConfig {
        TableConfig {
            destination_width: 14,
            number_width: 12,
            time_width: 14,
        }
    }

    #[test]
    fn test_render_matches_layout() {
        let records = vec![TrainRecord::new("Тверь", "12", "08:05")];
        let expected = "\
+----------------+--------------+----------------+
|  Destination   | Train number | Departure time |
+----------------+--------------+----------------+
|     Тверь      |      12      |     08:05      |
+----------------+--------------+----------------+
";
        assert_eq!(render(&records, &narrow()), expected);
    }

    #[test]
    fn test_render_empty_has_header_only() {
        let rendered = render(&Vec::<TrainRecord>::new(), &narrow());
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_default_widths() {
        let rendered = render(&Vec::<TrainRecord>::new(), &TableConfig::default());
        let first = rendered.lines().next().unwrap();
        // 35 + 15 + 25 plus borders and padding
        assert_eq!(first.chars().count(), 35 + 15 + 25 + 10);
    }
}
