//! Module encapsulation: the user list and the IMC formula are private, and
//! only `display_imc` is reachable from outside.
//!
//! The private state cannot be touched from another module:
//!
//! ```compile_fail
//! let app = healthcare_patterns::encapsulation::ImcApp::new();
//! let _ = app.users.len();
//! ```
//!
//! ```compile_fail
//! let _ = healthcare_patterns::encapsulation::calculate_imc(68.0, 1.65);
//! ```

use std::io::Write;

use crate::error::Result;

struct User {
    name: &'static str,
    weight: f64,
    height: f64,
}

fn default_users() -> Vec<User> {
    vec![
        User {
            name: "Maria Clara",
            weight: 68.0,
            height: 1.65,
        },
        User {
            name: "Jorge",
            weight: 85.0,
            height: 1.75,
        },
        User {
            name: "Marcelo",
            weight: 54.0,
            height: 1.60,
        },
    ]
}

fn calculate_imc(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

fn display_users(users: &[User], out: &mut dyn Write) -> Result<()> {
    for user in users {
        let imc = calculate_imc(user.weight, user.height);
        writeln!(out, "IMC - {}: {:.2}", user.name, imc)?;
    }
    Ok(())
}

// ============================================================================
// Before: data and helpers are public and free-floating
// ============================================================================

pub mod naive {
    use super::*;

    pub struct User {
        pub name: String,
        pub weight: f64,
        pub height: f64,
    }

    pub fn users() -> Vec<User> {
        super::default_users()
            .into_iter()
            .map(|u| User {
                name: u.name.to_string(),
                weight: u.weight,
                height: u.height,
            })
            .collect()
    }

    pub fn calculate_imc(weight: f64, height: f64) -> f64 {
        weight / (height * height)
    }

    pub fn display_user_imc(users: &[User], out: &mut dyn Write) -> Result<()> {
        for user in users {
            let imc = calculate_imc(user.weight, user.height);
            writeln!(out, "IMC - {}:{:.2}", user.name, imc)?;
        }
        Ok(())
    }
}

// ============================================================================
// After: private fields, one public operation
// ============================================================================

pub struct ImcApp {
    users: Vec<User>,
}

impl ImcApp {
    pub fn new() -> Self {
        Self {
            users: default_users(),
        }
    }

    pub fn display_imc(&self, out: &mut dyn Write) -> Result<()> {
        display_users(&self.users, out)
    }
}

impl Default for ImcApp {
    fn default() -> Self {
        Self::new()
    }
}

/// The closure rendition: state moves into the closure and only the
/// returned capability can reach it.
pub struct ImcCapabilities {
    pub display_imc: Box<dyn Fn(&mut dyn Write) -> Result<()>>,
}

pub fn imc_app() -> ImcCapabilities {
    let users = default_users();
    ImcCapabilities {
        display_imc: Box::new(move |out: &mut dyn Write| display_users(&users, out)),
    }
}
