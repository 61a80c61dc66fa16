use crate::db::log::{LogLine, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" => Colour::Cyan,
        "submit" => Colour::Blue,
        "email" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("migrate_to_") => Colour::Purple,
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to the column width.
fn op_target(line: &LogLine) -> String {
    let full = if line.target.is_empty() {
        line.operation.clone()
    } else {
        format!("{} ({})", line.operation, line.target)
    };

    if full.chars().count() > OP_MAX_WIDTH {
        let mut s: String = full.chars().take(OP_MAX_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        full
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let lines = load_log(&pool.conn)?;

        if lines.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = lines.iter().map(|l| l.id.to_string().len()).max().unwrap_or(1);
        let date_w = lines.iter().map(|l| l.date.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|l| op_target(l).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for line in &lines {
            let visible = op_target(line);
            let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

            // only the operation word is colored
            let color = color_for_operation(&line.operation);
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                line.id,
                line.date,
                colored,
                padding,
                line.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
