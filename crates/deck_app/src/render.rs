use deck_core::{AppViewModel, SessionState};

/// Prints the projected view. Rendering stays a dumb function of the view
/// model; all visibility and enablement decisions were made in deck_core.
pub fn print(view: &AppViewModel) {
    for line in render(view) {
        println!("{line}");
    }
}

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("--- {} ---", session_label(view.session)));

    for player in &view.players {
        match &player.card {
            Some(card) => lines.push(format!("  {:<20} [{}]", player.name, card)),
            None => lines.push(format!("  {:<20} [ ]", player.name)),
        }
    }

    if let Some(result) = &view.result {
        lines.push(format!("  result: {result}"));
    }

    if view.reveal_visible {
        lines.push(if view.reveal_enabled {
            "  reveal: ready (type: reveal)".to_string()
        } else {
            "  reveal: waiting for a card".to_string()
        });
    }
    if view.clear_visible {
        lines.push(if view.clear_enabled {
            "  clear: ready (type: clear)".to_string()
        } else {
            "  clear: locked".to_string()
        });
    }

    if view.register_form_visible {
        lines.push("  join with: name <display name>".to_string());
        if let Some(error) = &view.register_error {
            lines.push(format!("  registration failed: {error}"));
        }
    } else if !view.cards.is_empty() {
        lines.push(card_row(view));
    }

    lines
}

fn card_row(view: &AppViewModel) -> String {
    let mut row = String::from("  cards:");
    for card in &view.cards {
        if card.selected {
            row.push_str(&format!(" [{}]", card.value));
        } else if card.enabled {
            row.push_str(&format!("  {} ", card.value));
        } else {
            row.push_str(&format!(" ({})", card.value));
        }
    }
    row
}

fn session_label(session: SessionState) -> &'static str {
    match session {
        SessionState::Unregistered => "Join the session",
        SessionState::Voting => "Voting",
        SessionState::Revealed => "Revealed",
    }
}
