//! Services page section

use crate::components::progress_bar;
use crate::domain::Service;
use crate::state::Container;

/// Ranked services with progress bars
pub fn render_services(services: &Container<Service>) -> String {
    if services.is_loading() {
        return "Loading services...".to_string();
    }
    if let Some(error) = services.error() {
        return format!("Error: {error}");
    }

    let mut lines = vec!["Top Services".to_string()];
    if services.is_empty() {
        lines.push("No services yet. Use add-service to create one.".to_string());
    }
    for (index, service) in services.items().iter().enumerate() {
        lines.push(format!(
            "#{:<3} {}  ({} Form Submitted)",
            index + 1,
            service.name,
            service.forms_submitted
        ));
        lines.push(format!("     {}", progress_bar(service.progress)));
    }

    let action = if services.is_adding() { "Adding..." } else { "+ Add Service" };
    lines.push(format!("[{action}]"));
    lines.join("\n")
}
