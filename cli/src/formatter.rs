use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use fuzzrel::serializers::SystemDocument;
use fuzzrel::value::{format_degree, format_vector};
use fuzzrel::{BoundedMatrix, Composition, Operator, Solution};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_solution(&self, solution: &Solution) -> String {
        let mut output = String::new();

        let status = if solution.exist {
            "consistent"
        } else {
            "inconsistent"
        };
        output.push_str(&format!(
            "{} ({}) system {}x{}: {}\n\n",
            solution.family, solution.mode, solution.rows, solution.cols, status
        ));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Solution").set_alignment(CellAlignment::Left),
            Cell::new("Vector").set_alignment(CellAlignment::Left),
        ]));
        table.add_row(Row::from(vec![
            "extremal".to_string(),
            format_vector(&solution.extremal),
        ]));
        for (i, vector) in solution.boundary.iter().enumerate() {
            table.add_row(Row::from(vec![
                format!("boundary {}", i + 1),
                format_vector(vector),
            ]));
        }
        output.push_str(&table.to_string());
        output.push('\n');

        if solution.exist {
            output.push_str(&format!(
                "\n{} of {} rows left after reduction\n",
                solution.help_rows, solution.rows
            ));
        } else {
            let rows: Vec<String> = solution.contradict.iter().map(|i| i.to_string()).collect();
            output.push_str(&format!("\nContradicting rows: {}\n", rows.join(", ")));
        }
        output
    }

    pub fn format_extremal(&self, extremal: &[f64]) -> String {
        format!("extremal: {}\n", format_vector(extremal))
    }

    pub fn format_matrix(&self, title: &str, matrix: &BoundedMatrix) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.add_row(Row::from(vec![Cell::new(format!(
            "{} ({}x{})",
            title,
            matrix.rows(),
            matrix.cols()
        ))]));

        let content = matrix.to_string();
        let content = content.trim_end();
        if !content.is_empty() {
            table.add_row(Row::from(vec![Cell::new(content)]));
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }

    pub fn format_catalog(&self) -> String {
        let mut operators = Table::new();
        operators.load_preset(UTF8_FULL);
        operators.set_header(Row::from(vec!["Operator", "Aggregate identity"]));
        for op in Operator::ALL {
            let identity = op
                .identity()
                .map(format_degree)
                .unwrap_or_else(|| "-".to_string());
            operators.add_row(Row::from(vec![op.name().to_string(), identity]));
        }

        let mut compositions = Table::new();
        compositions.load_preset(UTF8_FULL);
        compositions.set_header(Row::from(vec!["Composition", "Aggregate", "Pointwise"]));
        for composition in Composition::ALL {
            let (aggregate, pointwise) = composition.operators();
            compositions.add_row(Row::from(vec![
                composition.name(),
                aggregate.name(),
                pointwise.name(),
            ]));
        }

        format!("{}\n\n{}\n", operators, compositions)
    }

    pub fn format_workspace_summary(
        &self,
        file_count: usize,
        systems: &[(String, SystemDocument)],
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Found {} files, {} systems\n\n",
            file_count,
            systems.len()
        ));
        for (name, doc) in systems {
            output.push_str(&format!(
                "{}: {} ({}), {}x{}\n",
                name,
                doc.family,
                doc.mode,
                doc.a.rows(),
                doc.a.cols()
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzrel::{Family, Mode};

    fn solution(exist: bool) -> Solution {
        Solution {
            family: Family::Godel,
            mode: Mode::Equality,
            rows: 2,
            cols: 2,
            exist,
            contradict: if exist { vec![] } else { vec![1] },
            extremal: vec![0.5, 0.25],
            boundary: if exist {
                vec![vec![0.5, 1.0], vec![1.0, 0.25]]
            } else {
                vec![]
            },
            help_rows: 2,
        }
    }

    #[test]
    fn test_consistent_solution_lists_boundary() {
        let output = Formatter::default().format_solution(&solution(true));
        assert!(output.starts_with("godel (=) system 2x2: consistent"));
        assert!(output.contains("extremal"));
        assert!(output.contains("[0.5, 0.25]"));
        assert!(output.contains("boundary 2"));
        assert!(output.contains("[1, 0.25]"));
        assert!(output.contains("2 of 2 rows left after reduction"));
    }

    #[test]
    fn test_inconsistent_solution_names_rows() {
        let output = Formatter::default().format_solution(&solution(false));
        assert!(output.contains("inconsistent"));
        assert!(output.contains("Contradicting rows: 1"));
        assert!(!output.contains("boundary 1"));
    }

    #[test]
    fn test_catalog_lists_every_composition() {
        let output = Formatter::default().format_catalog();
        for composition in Composition::ALL {
            assert!(output.contains(composition.name()), "{}", composition);
        }
        assert!(output.contains("lukasiewicz-implication"));
    }

    #[test]
    fn test_matrix_table_has_title() {
        let matrix = BoundedMatrix::from_rows(&[[0.5, 1.0]]).unwrap();
        let output = Formatter::default().format_matrix("max-min", &matrix);
        assert!(output.contains("max-min (1x2)"));
        assert!(output.contains("[0.5, 1]"));
    }
}
