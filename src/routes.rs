// src/routes.rs
//! Path resolution for the listing views.
use crate::config::ViewConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A configured listing view.
    View { path: String },
    /// Unknown path; the app redirects to `redirect_to` after a delay.
    NotFound { requested: String, redirect_to: String },
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Route::View { path } => path,
            Route::NotFound { requested, .. } => requested,
        }
    }
}

/// Leading slash, no trailing slash (except for the root itself).
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub fn resolve(path: &str, views: &[ViewConfig]) -> Route {
    let path = normalize(path);
    if views.iter().any(|v| normalize(&v.path) == path) {
        return Route::View { path };
    }
    Route::NotFound {
        redirect_to: best_match(&path, views),
        requested: path,
    }
}

/// The known view sharing the longest common prefix with `path`. Ties go to
/// the root view.
pub fn best_match(path: &str, views: &[ViewConfig]) -> String {
    let common = |candidate: &str| -> usize {
        path.chars()
            .zip(candidate.chars())
            .take_while(|(a, b)| a == b)
            .count()
    };

    let mut best: Option<(usize, String)> = None;
    for view in views {
        let candidate = normalize(&view.path);
        let score = common(&candidate);
        let better = match &best {
            None => true,
            Some((top, current)) => score > *top || (score == *top && candidate == "/" && current != "/"),
        };
        if better {
            best = Some((score, candidate));
        }
    }
    best.map(|(_, path)| path).unwrap_or_else(|| "/".to_string())
}
