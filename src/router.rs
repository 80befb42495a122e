use std::fmt;

/// The screens reachable by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Auth,
    Team { hackathon_id: String },
    NotFound(String),
}

/// Path patterns, in matching order, with a short description for `devcircle routes`
pub const ROUTE_TABLE: [(&str, &str); 3] = [
    ("/", "Landing page"),
    ("/auth", "Login / sign up"),
    ("/hackathon/:id/team", "Team management for a hackathon"),
];

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Route::Landing;
        }
        let normalized = if trimmed.len() > 1 {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        } else {
            trimmed
        };

        let segments: Vec<&str> = normalized.split('/').collect();
        match segments.as_slice() {
            ["", ""] => Route::Landing,
            ["", "auth"] => Route::Auth,
            ["", "hackathon", id, "team"] if !id.is_empty() => Route::Team {
                hackathon_id: id.to_string(),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn team(hackathon_id: &str) -> Route {
        Route::Team {
            hackathon_id: hackathon_id.to_string(),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::Team { hackathon_id } => format!("/hackathon/{}/team", hackathon_id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
