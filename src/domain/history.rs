// Command history display model
use super::command::{CommandStyle, RobotCommand};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// 1-based position in issue order; the newest entry has the highest number.
    pub number: usize,
    pub command: String,
    pub display_name: String,
    pub style: CommandStyle,
}

impl HistoryEntry {
    pub fn label(&self) -> String {
        format!("Commande #{}", self.number)
    }
}

/// Project stored history (oldest first) into display order (newest first).
pub fn newest_first(history: &[String]) -> Vec<HistoryEntry> {
    let total = history.len();
    history
        .iter()
        .rev()
        .enumerate()
        .map(|(index, name)| {
            let known = name.parse::<RobotCommand>().ok();
            HistoryEntry {
                number: total - index,
                command: name.clone(),
                display_name: known
                    .map(|c| c.display_name().to_string())
                    .unwrap_or_else(|| name.clone()),
                style: known.map(|c| c.style()).unwrap_or(CommandStyle::Plain),
            }
        })
        .collect()
}

pub fn summary(total: usize) -> String {
    if total == 0 {
        "Aucune commande n'a encore été envoyée.".to_string()
    } else {
        format!("{} commandes enregistrées", total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_numbering() {
        let history = vec![
            "START".to_string(),
            "DIRECT_LEFT".to_string(),
            "WAVE".to_string(),
        ];
        let entries = newest_first(&history);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].command, "WAVE");
        assert_eq!(entries[0].label(), "Commande #3");
        assert_eq!(entries[0].display_name, "WAVE");
        assert_eq!(entries[0].style, CommandStyle::Plain);

        assert_eq!(entries[1].display_name, "TOURNER À GAUCHE");
        assert_eq!(entries[1].style, CommandStyle::Turn);

        assert_eq!(entries[2].label(), "Commande #1");
        assert_eq!(entries[2].style, CommandStyle::Start);
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(0), "Aucune commande n'a encore été envoyée.");
        assert_eq!(summary(4), "4 commandes enregistrées");
    }
}
