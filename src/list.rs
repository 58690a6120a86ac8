//! List-state synchronization core.
//!
//! `ListState` is the pure state machine behind every resource table:
//! the cached page from the last successful fetch, the paging cursor,
//! the client-side filter, the single selected item, and the one
//! pending/executing mutation slot. Components own one `ListState` per
//! view inside a signal and drive all network effects from it; nothing
//! here performs I/O, which keeps the whole synchronization pattern
//! unit-testable off-browser.

use thiserror::Error;

use crate::models::{Role, User, UserFilter, Vulnerability};

/// A listable backend resource with a stable identifier and a pure
/// client-side filter predicate.
pub trait Resource: Clone + PartialEq + 'static {
    type Filter: Clone + Default + PartialEq;

    fn id(&self) -> u32;
    fn matches(&self, filter: &Self::Filter) -> bool;
}

impl Resource for User {
    type Filter = UserFilter;

    fn id(&self) -> u32 {
        self.id
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter.matches(self)
    }
}

// The vulnerability view splits rows by status instead of filtering,
// so its filter is the unit no-op.
impl Resource for Vulnerability {
    type Filter = ();

    fn id(&self) -> u32 {
        self.id
    }

    fn matches(&self, _filter: &()) -> bool {
        true
    }
}

/// Per-controller mutation slot.
///
/// `Idle → Pending(a) → Executing(a) → Idle` on success/failure, or
/// `Pending(a) → Idle` on cancel. At most one action exists at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionState<A> {
    #[default]
    Idle,
    Pending(A),
    Executing(A),
}

/// Rejections raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("No puedes eliminar tu propio usuario")]
    SelfDelete,
    #[error("Esta cuenta está protegida y no se puede eliminar")]
    ProtectedAccount,
    #[error("El rol no ha cambiado")]
    RoleUnchanged,
    #[error("Ya hay una acción en curso")]
    Busy,
    #[error("No hay ninguna acción pendiente")]
    NothingPending,
}

/// Client-side guard for user deletion. The backend enforces the same
/// rules; failing here just skips a request that would be refused.
pub fn check_delete_allowed(target: &User, session_user_id: u32) -> Result<(), ActionError> {
    if target.id == session_user_id {
        return Err(ActionError::SelfDelete);
    }
    if target.is_protected() {
        return Err(ActionError::ProtectedAccount);
    }
    Ok(())
}

/// Idempotence short-circuit for role updates.
pub fn check_role_change(target: &User, new_role: Role) -> Result<(), ActionError> {
    if target.role == new_role {
        Err(ActionError::RoleUnchanged)
    } else {
        Ok(())
    }
}

/// Local list state for one resource view.
#[derive(Debug, Clone)]
pub struct ListState<R: Resource, A: Clone + PartialEq = ()> {
    items: Vec<R>,
    page: usize,
    page_size: usize,
    total: Option<u64>,
    filter: R::Filter,
    selected: Option<u32>,
    action: ActionState<A>,
    /// Monotonic load token; responses carrying a stale token are
    /// discarded so two in-flight loads can never interleave.
    load_token: u64,
}

impl<R: Resource, A: Clone + PartialEq> ListState<R, A> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            total: None,
            filter: R::Filter::default(),
            selected: None,
            action: ActionState::Idle,
            load_token: 0,
        }
    }

    // Loading

    /// Start a load, superseding any load still in flight. The returned
    /// token must be handed back to `apply_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.load_token += 1;
        self.load_token
    }

    /// True while `token` identifies the most recent load.
    pub fn is_current(&self, token: u64) -> bool {
        self.load_token == token
    }

    /// Install a fetched page, wholesale, unless a newer load has
    /// started since `token` was issued. Returns whether it applied.
    pub fn apply_load(&mut self, token: u64, items: Vec<R>, total: Option<u64>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.items = items;
        self.total = total;
        true
    }

    // Cache and filter

    /// The full fetched page (stats are derived from this, never from
    /// the filtered view).
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn filter(&self) -> &R::Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: R::Filter) {
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.filter = R::Filter::default();
    }

    /// Rows currently visible: a pure function of (cache, filter).
    pub fn visible(&self) -> Vec<R> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.filter))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: u32) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    // Selection

    pub fn select(&mut self, id: Option<u32>) {
        self.selected = id;
    }

    pub fn selected(&self) -> Option<&R> {
        self.selected.and_then(|id| self.find(id))
    }

    // Pagination

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Offset of the current page for `?skip=`.
    pub fn skip(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// With an authoritative total, compare against it; without one the
    /// backend supplies no count, so a full page is the only hint that
    /// more rows may exist.
    pub fn has_next(&self) -> bool {
        match self.total {
            Some(total) => ((self.page * self.page_size) as u64) < total,
            None => self.items.len() == self.page_size,
        }
    }

    /// Move to the previous page. The caller reloads on `true`.
    pub fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    // Action slot

    pub fn action(&self) -> &ActionState<A> {
        &self.action
    }

    pub fn is_idle(&self) -> bool {
        self.action == ActionState::Idle
    }

    /// Queue an action awaiting confirmation. Rejected while another
    /// action is pending or executing, never silently dropped.
    pub fn request_action(&mut self, action: A) -> Result<(), ActionError> {
        if !self.is_idle() {
            return Err(ActionError::Busy);
        }
        self.action = ActionState::Pending(action);
        Ok(())
    }

    /// Confirm the queued action, moving it to `Executing` and handing
    /// it to the caller exactly once. A second confirm while executing
    /// is rejected with `Busy`.
    pub fn begin_execute(&mut self) -> Result<A, ActionError> {
        match &self.action {
            ActionState::Pending(action) => {
                let action = action.clone();
                self.action = ActionState::Executing(action.clone());
                Ok(action)
            }
            ActionState::Executing(_) => Err(ActionError::Busy),
            ActionState::Idle => Err(ActionError::NothingPending),
        }
    }

    /// Terminal transition back to `Idle`, on success or failure.
    pub fn finish_action(&mut self) {
        self.action = ActionState::Idle;
    }

    /// Cancel a pending confirmation. An executing action cannot be
    /// cancelled; returns whether anything changed.
    pub fn cancel_action(&mut self) -> bool {
        if matches!(self.action, ActionState::Pending(_)) {
            self.action = ActionState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserFilter};

    fn user(id: u32, name: &str, role: Role) -> User {
        User {
            id,
            username: name.to_string(),
            email: Some(format!("{name}@example.com")),
            role,
            created_at: None,
        }
    }

    fn page_of_ten() -> Vec<User> {
        (1..=10)
            .map(|i| {
                let role = if i <= 3 { Role::Admin } else { Role::User };
                user(i, &format!("user{i}"), role)
            })
            .collect()
    }

    #[test]
    fn apply_load_replaces_cache_wholesale() {
        let mut list: ListState<User> = ListState::new(10);
        let token = list.begin_load();
        assert!(list.apply_load(token, page_of_ten(), None));
        assert_eq!(list.items().len(), 10);

        let token = list.begin_load();
        assert!(list.apply_load(token, vec![user(99, "solo", Role::User)], None));
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn stale_load_response_is_discarded() {
        let mut list: ListState<User> = ListState::new(10);
        let first = list.begin_load();
        let second = list.begin_load();
        // The response for the superseded load arrives late.
        assert!(!list.apply_load(first, page_of_ten(), None));
        assert!(list.items().is_empty());
        assert!(!list.is_current(first));
        assert!(list.apply_load(second, page_of_ten(), None));
        assert_eq!(list.items().len(), 10);
    }

    #[test]
    fn filtering_never_mutates_the_cache() {
        let mut list: ListState<User> = ListState::new(10);
        let token = list.begin_load();
        list.apply_load(token, page_of_ten(), None);

        list.set_filter(UserFilter { search: String::new(), role: Some(Role::Admin) });
        assert_eq!(list.visible().len(), 3);
        assert_eq!(list.items().len(), 10);

        // Same cache, same filter: same rows, twice.
        assert_eq!(list.visible(), list.visible());

        list.clear_filter();
        assert_eq!(list.visible().len(), 10);
    }

    #[test]
    fn stats_reflect_full_page_while_filter_is_active() {
        use crate::models::UserStats;
        let mut list: ListState<User> = ListState::new(10);
        let token = list.begin_load();
        list.apply_load(token, page_of_ten(), None);
        list.set_filter(UserFilter { search: String::new(), role: Some(Role::Admin) });

        assert_eq!(list.visible().len(), 3);
        let stats = UserStats::from_page(list.items());
        assert_eq!(stats.total, 10);
        assert_eq!(stats.admins, 3);
    }

    #[test]
    fn pagination_without_total_uses_full_page_heuristic() {
        let mut list: ListState<User> = ListState::new(10);
        let token = list.begin_load();
        list.apply_load(token, page_of_ten(), None);
        assert!(list.has_next());
        assert!(!list.has_prev());
        assert!(list.next_page());
        assert_eq!(list.skip(), 10);

        // A short page means there is nothing further.
        let token = list.begin_load();
        list.apply_load(token, vec![user(11, "tail", Role::User)], None);
        assert!(!list.has_next());
        assert!(list.prev_page());
        assert_eq!(list.page(), 1);
        assert!(!list.prev_page());
    }

    #[test]
    fn pagination_with_total_is_authoritative() {
        let mut list: ListState<User> = ListState::new(10);
        let token = list.begin_load();
        list.apply_load(token, page_of_ten(), Some(10));
        assert!(!list.has_next());
        assert!(!list.next_page());

        let token = list.begin_load();
        list.apply_load(token, page_of_ten(), Some(25));
        assert!(list.has_next());
    }

    #[test]
    fn exactly_one_action_in_flight() {
        let mut list: ListState<User, u32> = ListState::new(10);
        list.request_action(7).unwrap();
        assert_eq!(list.request_action(8), Err(ActionError::Busy));

        assert_eq!(list.begin_execute(), Ok(7));
        // Confirming again while executing is rejected, not duplicated.
        assert_eq!(list.begin_execute(), Err(ActionError::Busy));
        assert_eq!(list.request_action(9), Err(ActionError::Busy));

        list.finish_action();
        assert!(list.is_idle());
        list.request_action(9).unwrap();
    }

    #[test]
    fn cancel_only_applies_to_pending_actions() {
        let mut list: ListState<User, u32> = ListState::new(10);
        assert!(!list.cancel_action());
        assert_eq!(list.begin_execute(), Err(ActionError::NothingPending));

        list.request_action(1).unwrap();
        assert!(list.cancel_action());
        assert!(list.is_idle());

        list.request_action(2).unwrap();
        list.begin_execute().unwrap();
        assert!(!list.cancel_action());
        assert_eq!(*list.action(), ActionState::Executing(2));
    }

    #[test]
    fn selection_resolves_against_cache() {
        let mut list: ListState<User> = ListState::new(10);
        let token = list.begin_load();
        list.apply_load(token, page_of_ten(), None);

        list.select(Some(3));
        assert_eq!(list.selected().map(|u| u.username.as_str()), Some("user3"));
        list.select(None);
        assert!(list.selected().is_none());

        // A selection pointing at a row the next fetch dropped is gone.
        list.select(Some(3));
        let token = list.begin_load();
        list.apply_load(token, vec![user(99, "other", Role::User)], None);
        assert!(list.selected().is_none());
    }

    #[test]
    fn delete_guards_fire_before_any_network_call() {
        let me = user(5, "me", Role::Admin);
        let primary = user(1, "root", Role::Admin);
        let named_admin = user(8, "admin", Role::Admin);
        let other = user(9, "other", Role::User);

        assert_eq!(check_delete_allowed(&me, 5), Err(ActionError::SelfDelete));
        assert_eq!(check_delete_allowed(&primary, 5), Err(ActionError::ProtectedAccount));
        assert_eq!(check_delete_allowed(&named_admin, 5), Err(ActionError::ProtectedAccount));
        assert_eq!(check_delete_allowed(&other, 5), Ok(()));
    }

    #[test]
    fn role_update_short_circuits_when_unchanged() {
        let u = user(9, "other", Role::User);
        assert_eq!(check_role_change(&u, Role::User), Err(ActionError::RoleUnchanged));
        assert_eq!(check_role_change(&u, Role::Admin), Ok(()));
    }
}
