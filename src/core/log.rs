use crate::core::notify::{Toast, ToastKind};
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const MESSAGE_MAX: usize = 60;

/// Restituisce il colore ANSI in base al tipo di notifica
fn color_for_kind(kind: ToastKind) -> Colour {
    match kind {
        ToastKind::Success => Colour::Green,
        ToastKind::Error => Colour::Red,
        ToastKind::Warning => Colour::Yellow,
        ToastKind::Info => Colour::Blue,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One line per toast: `id: kind | message`, kind coloured and padded.
    pub fn format_history(history: &[Toast]) -> Vec<String> {
        let id_w = history
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(1);
        let kind_w = history
            .iter()
            .map(|t| t.kind.as_str().len())
            .max()
            .unwrap_or(4);

        history
            .iter()
            .map(|t| {
                let colored = color_for_kind(t.kind).paint(t.kind.as_str()).to_string();
                let padding = " ".repeat(kind_w.saturating_sub(strip_ansi(&colored).len()));
                let message = truncate(&t.message, MESSAGE_MAX);
                format!("{:>id_w$}: {colored}{padding} | {message}", t.id)
            })
            .collect()
    }

    pub fn print_log(history: &[Toast]) {
        if history.is_empty() {
            println!("No notifications in this session.");
            return;
        }

        println!("📜 Notification log:\n");
        for line in Self::format_history(history) {
            println!("{line}");
        }
    }
}
