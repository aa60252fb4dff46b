//! User records returned by the simulated backend.

/// A single user as delivered by a fetch.
///
/// Values are immutable once built; a new fetch result replaces the whole
/// list rather than editing entries in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: u32,
    name: String,
    email: String,
    role: String,
}

impl User {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Uppercased first character of the name, used for the avatar badge.
    ///
    /// Returns `'?'` for an empty name. Characters whose uppercase form
    /// expands to several characters keep only the first one.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|ch| ch.to_uppercase().next())
            .unwrap_or('?')
    }
}

/// The fixed list served by a successful fetch, in server order.
pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Ana García", "ana@ejemplo.com", "Desarrolladora Flutter"),
        User::new(2, "Carlos Ruiz", "carlos@ejemplo.com", "Diseñador UI/UX"),
        User::new(3, "María López", "maria@ejemplo.com", "Product Manager"),
        User::new(4, "Juan Pérez", "juan@ejemplo.com", "Backend Developer"),
    ]
}
