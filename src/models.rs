//! Frontend Models
//!
//! Data structures matching backend entities, plus the pure filter
//! predicates and per-page stats the list views derive from them.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// User role as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Spanish display label used across the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::User => "Usuario",
        }
    }

    /// CSS badge class suffix.
    pub fn css_class(&self) -> &'static str {
        match self {
            Role::Admin => "role-admin",
            Role::User => "role-user",
        }
    }

    /// Wire value, as used in select options and request bodies.
    pub fn key(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn parse_key(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// User record (matches backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: Option<String>,
}

impl User {
    /// Built-in accounts the UI never offers to delete. The backend
    /// enforces the same rule; this guard only avoids a doomed request.
    pub fn is_protected(&self) -> bool {
        self.id == 1 || self.username == "admin"
    }
}

/// Vulnerability severity. `rank` orders `critical` first for tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Sort rank: lower value renders higher in the pending table.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Critical => "severity-critical",
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low => "severity-low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VulnStatus {
    Active,
    Resolved,
}

/// Vulnerability record from the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: u32,
    pub name: String,
    pub severity: Severity,
    pub status: VulnStatus,
    pub description: Option<String>,
    pub created_at: Option<String>,
    pub resolved_date: Option<String>,
}

impl Vulnerability {
    /// Table-cell description, truncated to 50 chars.
    pub fn short_description(&self) -> String {
        match self.description.as_deref() {
            None | Some("") => "Sin descripción".to_string(),
            Some(d) if d.chars().count() > 50 => {
                format!("{}...", d.chars().take(50).collect::<String>())
            }
            Some(d) => d.to_string(),
        }
    }
}

// ========================
// Filters
// ========================

/// Client-side filter over a fetched page of users.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Substring match (case-insensitive) over username and email.
    pub search: String,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let matches_search = self.search.is_empty() || {
            let term = self.search.to_lowercase();
            user.username.to_lowercase().contains(&term)
                || user
                    .email
                    .as_deref()
                    .is_some_and(|e| e.to_lowercase().contains(&term))
        };
        let matches_role = self.role.is_none_or(|r| user.role == r);
        matches_search && matches_role
    }
}

// ========================
// Per-page stats
// ========================

/// Stats cards for the user view. Computed from the full fetched page,
/// never the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub admins: usize,
    pub users: usize,
}

impl UserStats {
    pub fn from_page(page: &[User]) -> Self {
        let admins = page.iter().filter(|u| u.role == Role::Admin).count();
        Self {
            total: page.len(),
            admins,
            users: page.len() - admins,
        }
    }
}

/// Summary counts for the vulnerability view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VulnStats {
    pub total: u64,
    pub active: usize,
    pub resolved: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl VulnStats {
    /// `total` comes from the backend when supplied, else the page length.
    pub fn from_page(page: &[Vulnerability], total: Option<u64>) -> Self {
        let count_sev = |s: Severity| page.iter().filter(|v| v.severity == s).count();
        Self {
            total: total.unwrap_or(page.len() as u64),
            active: page.iter().filter(|v| v.status == VulnStatus::Active).count(),
            resolved: page.iter().filter(|v| v.status == VulnStatus::Resolved).count(),
            critical: count_sev(Severity::Critical),
            high: count_sev(Severity::High),
            medium: count_sev(Severity::Medium),
            low: count_sev(Severity::Low),
        }
    }
}

/// Active vulnerabilities ordered most severe first.
pub fn pending_sorted(page: &[Vulnerability]) -> Vec<Vulnerability> {
    let mut pending: Vec<_> = page
        .iter()
        .filter(|v| v.status == VulnStatus::Active)
        .cloned()
        .collect();
    pending.sort_by_key(|v| v.severity.rank());
    pending
}

/// Resolved vulnerabilities, newest resolution first. RFC 3339 strings
/// compare chronologically, so a plain descending string sort suffices.
pub fn resolved_sorted(page: &[Vulnerability]) -> Vec<Vulnerability> {
    let mut resolved: Vec<_> = page
        .iter()
        .filter(|v| v.status == VulnStatus::Resolved)
        .cloned()
        .collect();
    resolved.sort_by(|a, b| b.resolved_date.cmp(&a.resolved_date));
    resolved
}

// ========================
// Helpers
// ========================

/// Format a backend RFC 3339 timestamp as `dd/mm/yyyy`. Falls back to
/// the raw string when it doesn't parse, and `N/A` when absent.
pub fn format_date(iso: Option<&str>) -> String {
    match iso {
        None | Some("") => "N/A".to_string(),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, name: &str, email: Option<&str>, role: Role) -> User {
        User {
            id,
            username: name.to_string(),
            email: email.map(str::to_string),
            role,
            created_at: None,
        }
    }

    #[test]
    fn filter_matches_username_and_email_case_insensitive() {
        let u = user(2, "Alice", Some("alice@example.com"), Role::User);
        let by_name = UserFilter { search: "ali".into(), role: None };
        let by_email = UserFilter { search: "EXAMPLE".into(), role: None };
        let miss = UserFilter { search: "bob".into(), role: None };
        assert!(by_name.matches(&u));
        assert!(by_email.matches(&u));
        assert!(!miss.matches(&u));
    }

    #[test]
    fn filter_combines_search_and_role() {
        let u = user(2, "alice", None, Role::User);
        let f = UserFilter { search: "alice".into(), role: Some(Role::Admin) };
        assert!(!f.matches(&u));
        let f = UserFilter { search: "alice".into(), role: Some(Role::User) };
        assert!(f.matches(&u));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let u = user(7, "bob", None, Role::Admin);
        assert!(UserFilter::default().matches(&u));
    }

    #[test]
    fn protected_accounts() {
        assert!(user(1, "anything", None, Role::Admin).is_protected());
        assert!(user(9, "admin", None, Role::Admin).is_protected());
        assert!(!user(9, "alice", None, Role::Admin).is_protected());
    }

    #[test]
    fn user_stats_count_full_page() {
        let page = vec![
            user(1, "admin", None, Role::Admin),
            user(2, "a", None, Role::User),
            user(3, "b", None, Role::Admin),
        ];
        let stats = UserStats::from_page(&page);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.admins, 2);
        assert_eq!(stats.users, 1);
    }

    #[test]
    fn severity_rank_orders_critical_first() {
        let mut sevs = vec![Severity::Low, Severity::Critical, Severity::Medium, Severity::High];
        sevs.sort_by_key(Severity::rank);
        assert_eq!(
            sevs,
            vec![Severity::Critical, Severity::High, Severity::Medium, Severity::Low]
        );
    }

    #[test]
    fn vuln_stats_prefer_backend_total() {
        let vuln = Vulnerability {
            id: 1,
            name: "CVE-2024-0001".into(),
            severity: Severity::High,
            status: VulnStatus::Active,
            description: None,
            created_at: None,
            resolved_date: None,
        };
        let stats = VulnStats::from_page(std::slice::from_ref(&vuln), Some(42));
        assert_eq!(stats.total, 42);
        assert_eq!(stats.active, 1);
        let stats = VulnStats::from_page(&[vuln], None);
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn short_description_truncates_at_50_chars() {
        let mut v = Vulnerability {
            id: 1,
            name: "x".into(),
            severity: Severity::Low,
            status: VulnStatus::Active,
            description: Some("a".repeat(60)),
            created_at: None,
            resolved_date: None,
        };
        assert_eq!(v.short_description(), format!("{}...", "a".repeat(50)));
        v.description = None;
        assert_eq!(v.short_description(), "Sin descripción");
    }

    fn vuln(id: u32, sev: Severity, status: VulnStatus, resolved: Option<&str>) -> Vulnerability {
        Vulnerability {
            id,
            name: format!("CVE-2024-{id:04}"),
            severity: sev,
            status,
            description: None,
            created_at: None,
            resolved_date: resolved.map(str::to_string),
        }
    }

    #[test]
    fn pending_table_orders_by_severity() {
        let page = vec![
            vuln(1, Severity::Low, VulnStatus::Active, None),
            vuln(2, Severity::Critical, VulnStatus::Active, None),
            vuln(3, Severity::High, VulnStatus::Resolved, Some("2024-05-01T00:00:00+00:00")),
            vuln(4, Severity::High, VulnStatus::Active, None),
        ];
        let pending = pending_sorted(&page);
        let ids: Vec<_> = pending.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn resolved_table_orders_newest_first() {
        let page = vec![
            vuln(1, Severity::Low, VulnStatus::Resolved, Some("2024-01-01T00:00:00+00:00")),
            vuln(2, Severity::Low, VulnStatus::Active, None),
            vuln(3, Severity::Low, VulnStatus::Resolved, Some("2024-06-01T00:00:00+00:00")),
        ];
        let resolved = resolved_sorted(&page);
        let ids: Vec<_> = resolved.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn format_date_handles_all_inputs() {
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("2024-03-05T10:30:00+00:00")), "05/03/2024");
        assert_eq!(format_date(Some("garbage")), "garbage");
    }

    #[test]
    fn enums_deserialize_lowercase() {
        let u: User = serde_json::from_str(
            r#"{"id":3,"username":"ana","email":null,"role":"admin","created_at":null}"#,
        )
        .unwrap();
        assert_eq!(u.role, Role::Admin);
        let s: Severity = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(s, Severity::Critical);
    }
}
