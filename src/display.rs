use crate::error::ChatError;
use crate::message::Role;
use crate::sampling::{Knob, SamplingParameters};
use console::{StyledObject, style};
use termimad::MadSkin;

fn box_width() -> usize {
    let term = console::Term::stdout();
    let terminal_width = term.size().1 as usize;
    std::cmp::min(terminal_width.saturating_sub(4), 120).max(60)
}

fn role_header(role: Role) -> StyledObject<String> {
    let label = role.as_str().to_uppercase();
    match role {
        Role::Assistant => style(label).bold().blue(),
        Role::System => style(label).bold().magenta(),
        Role::User => style(label).bold().green(),
    }
}

/// Whether the text carries Markdown worth handing to termimad.
pub fn looks_like_markdown(text: &str) -> bool {
    text.contains("```") || text.contains('*') || text.contains('`') || text.contains('#')
}

/// Splits `line` into pieces no wider than `max_len` characters, breaking at
/// the last space where one exists.
pub fn wrap_line(line: &str, max_len: usize) -> Vec<String> {
    let max_len = max_len.max(1);
    let mut lines = Vec::new();
    let mut remaining: Vec<char> = line.chars().collect();

    if remaining.is_empty() {
        lines.push(String::new());
        return lines;
    }

    while !remaining.is_empty() {
        if remaining.len() <= max_len {
            lines.push(remaining.iter().collect());
            break;
        }

        let head = &remaining[..max_len];
        let (piece, rest_start) = match head.iter().rposition(|c| *c == ' ') {
            Some(break_pos) if break_pos > 0 => (&remaining[..break_pos], break_pos + 1),
            _ => (head, max_len),
        };
        lines.push(piece.iter().collect());

        let rest: Vec<char> = remaining[rest_start..].to_vec();
        let skip = rest.iter().take_while(|c| **c == ' ').count();
        remaining = rest[skip..].to_vec();
    }

    lines
}

/// Renders one transcript entry under a role header.
pub fn display_message(role: Role, content: &str) {
    let width = box_width();
    println!("\n{}", role_header(role));

    if role == Role::Assistant && looks_like_markdown(content) {
        let skin = MadSkin::default();
        print!("{}", skin.term_text(content));
        return;
    }

    for line in content.lines() {
        for piece in wrap_line(line, width) {
            println!("{}", piece);
        }
    }
}

/// Drawn in place of clearing the screen when stdout is not a terminal.
pub fn display_transcript_separator() {
    println!("{}", style("═".repeat(box_width())).dim());
}

pub fn display_settings(settings: &SamplingParameters, role: Role, model: &str) {
    println!("{}", style("Current settings").bold().underlined());
    println!("  {:<18} {}", "Model:", style(model).cyan());
    println!("  {:<18} {}", "Role:", role_header(role));
    for knob in Knob::ALL {
        let range = knob.range();
        println!(
            "  {:<18} {:>5.2}  {}",
            format!("{}:", knob.label()),
            settings.get(knob),
            style(format!("[{}, {}]", range.min, range.max)).dim()
        );
    }
}

pub fn display_error(err: &ChatError) {
    eprintln!("{} {}", style("error:").bold().red(), err);
}

pub fn display_info(text: &str) {
    println!("{}", style(text).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        assert_eq!(wrap_line("hello world", 40), vec!["hello world"]);
        assert_eq!(wrap_line("", 40), vec![""]);
    }

    #[test]
    fn long_lines_break_at_spaces() {
        assert_eq!(
            wrap_line("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn unbroken_words_are_cut_by_character() {
        assert_eq!(wrap_line("żółćżółć", 3), vec!["żół", "ćżó", "łć"]);
    }

    #[test]
    fn markdown_detection() {
        assert!(looks_like_markdown("# Title"));
        assert!(looks_like_markdown("use `cargo`"));
        assert!(!looks_like_markdown("plain answer."));
    }
}
