use std::fmt::Write;

use reporter_core::{AppViewModel, LoadStatus};

pub fn render(view: &AppViewModel) -> String {
    let status_text = match view.load_status {
        LoadStatus::NotLoaded => "Loading repositories...".to_string(),
        LoadStatus::Loaded { count } => format!("Repositories: {count}"),
        // The list below is whatever the last successful load produced.
        LoadStatus::Failed(err) => format!(
            "Repositories: {} (last refresh failed: {err})",
            view.repositories.len()
        ),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{status_text}");

    for (idx, row) in view.repositories.iter().enumerate() {
        let repo = &row.repository;
        let marker = if row.is_favorite { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {:>2}. {} [{}] stars: {} forks: {}",
            idx + 1,
            repo.name(),
            repo.language(),
            repo.stars(),
            repo.forks()
        );
        if !repo.description().is_empty() {
            let _ = writeln!(out, "       {}", repo.description());
        }
    }

    if view.favorites.is_empty() {
        let _ = writeln!(out, "Favorites: none");
    } else {
        let names: Vec<&str> = view.favorites.iter().map(|repo| repo.name()).collect();
        let _ = writeln!(out, "Favorites: {}", names.join(", "));
    }

    out
}
