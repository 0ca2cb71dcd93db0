//! Tickets page section
//!
//! Table of the latest tickets with a status dot, followed by the pager.

use crate::components::{Column, Pager, TextTable};
use crate::domain::{Ticket, TicketStatus};
use crate::state::Container;

/// Text stand-in for the coloured status dot
fn status_dot(status: &TicketStatus) -> &'static str {
    match status.indicator() {
        "bg-cyan-500" => "◔",
        "bg-green-500" => "●",
        "bg-red-500" => "✕",
        _ => "○",
    }
}

fn columns() -> Vec<Column<Ticket>> {
    vec![
        Column::new("TICKET ID", |t: &Ticket| format!("Ticket {}", t.id)).max_width(18),
        Column::new("TICKET DETAILS", |t: &Ticket| t.issue.clone()).max_width(36),
        Column::new("CLIENT/PROJECT NAME", |t: &Ticket| {
            format!("{} / {}", t.customer, t.project)
        })
        .max_width(36),
        Column::new("DATE", |t: &Ticket| t.date.clone()).fixed_width(10),
        Column::new("STATUS", |t: &Ticket| {
            format!("{} {}", status_dot(&t.status), t.status)
        }),
    ]
}

/// Latest tickets, or the loading/error line in their place
pub fn render_tickets(tickets: &Container<Ticket>, pager: &Pager) -> String {
    if tickets.is_loading() {
        return "Loading tickets...".to_string();
    }
    if let Some(error) = tickets.error() {
        return format!("Error: {error}");
    }

    let table = TextTable::new(columns()).empty_message("No tickets yet. Use add-ticket to create one.");
    format!(
        "Latest Tickets\n{}\n{}",
        table.render(tickets.items()),
        pager.render()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    fn ticket(id: &str, status: &str) -> Ticket {
        Ticket {
            id: RecordId::from(id),
            customer: "Jacob Jones".to_string(),
            issue: "Login page not loading".to_string(),
            status: TicketStatus::from(status),
            project: "Client Portal".to_string(),
            date: "2024-05-02".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn table_has_ticket_columns_and_pager() {
        let mut state = Container::new();
        state.fetch_fulfilled(vec![ticket("t1", "To do"), ticket("t2", "On hold")]);
        let out = render_tickets(&state, &Pager::new());

        assert!(out.contains("TICKET ID"));
        assert!(out.contains("CLIENT/PROJECT NAME"));
        assert!(out.contains("Ticket t1"));
        assert!(out.contains("◔ To do"));
        assert!(out.contains("○ On hold"));
        assert!(out.ends_with("[1] 2 3 4 5  ›"));
    }

    #[test]
    fn error_replaces_table() {
        let mut state: Container<Ticket> = Container::new();
        state.delete_rejected(Some("row is referenced".to_string()));
        assert_eq!(render_tickets(&state, &Pager::new()), "Error: row is referenced");
    }

    #[test]
    fn dots_follow_status_mapping() {
        assert_eq!(status_dot(&TicketStatus::Completed), "●");
        assert_eq!(status_dot(&TicketStatus::Cancelled), "✕");
    }
}
