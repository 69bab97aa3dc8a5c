//! Ownership guard for user-owned resources.
//!
//! Every idea-scoped read, mutation, or generation goes through
//! [`authorize`] before any side effect. Child resources (requirements,
//! comments, bookmarks, shares) have no owner of their own; access to them
//! is decided by the owning idea.

use std::future::Future;

use crate::error::CoreError;
use crate::types::DbId;

/// A resource with exactly one owning user.
pub trait Owned {
    /// The user id recorded as owner when the resource was created.
    fn owner_id(&self) -> DbId;
}

/// Check the result of a lookup against the requesting principal.
///
/// - `None` becomes [`CoreError::NotFound`].
/// - A resource owned by someone else becomes [`CoreError::Forbidden`].
pub fn ensure_owner<T: Owned>(
    found: Option<T>,
    entity: &'static str,
    id: DbId,
    principal: DbId,
) -> Result<T, CoreError> {
    let resource = found.ok_or(CoreError::NotFound { entity, id })?;

    if resource.owner_id() != principal {
        return Err(CoreError::Forbidden(format!(
            "Not enough permissions to access this {}",
            entity.to_lowercase()
        )));
    }

    Ok(resource)
}

/// Fetch a resource with `fetch` and verify that `principal` owns it.
///
/// The fetch error type is converted into the caller's error type, so the
/// same guard works with repository calls returning `sqlx::Error` and with
/// in-memory lookups in tests.
///
/// ```ignore
/// let idea = authorize("Idea", idea_id, auth.user_id, |id| {
///     IdeaRepo::find_by_id(&state.pool, id)
/// })
/// .await?;
/// ```
pub async fn authorize<T, E, FE, F, Fut>(
    entity: &'static str,
    id: DbId,
    principal: DbId,
    fetch: F,
) -> Result<T, E>
where
    T: Owned,
    F: FnOnce(DbId) -> Fut,
    Fut: Future<Output = Result<Option<T>, FE>>,
    E: From<CoreError> + From<FE>,
{
    let found = fetch(id).await?;
    Ok(ensure_owner(found, entity, id, principal)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::convert::Infallible;

    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: DbId,
        owner: DbId,
    }

    impl Owned for Note {
        fn owner_id(&self) -> DbId {
            self.owner
        }
    }

    #[derive(Debug)]
    enum TestError {
        Core(CoreError),
    }

    impl From<CoreError> for TestError {
        fn from(e: CoreError) -> Self {
            TestError::Core(e)
        }
    }

    impl From<Infallible> for TestError {
        fn from(e: Infallible) -> Self {
            match e {}
        }
    }

    fn store() -> HashMap<DbId, Note> {
        HashMap::from([(1, Note { id: 1, owner: 42 }), (2, Note { id: 2, owner: 7 })])
    }

    async fn lookup(store: &HashMap<DbId, Note>, id: DbId) -> Result<Option<Note>, Infallible> {
        Ok(store.get(&id).cloned())
    }

    #[test]
    fn owner_gets_resource_back() {
        let note = ensure_owner(Some(Note { id: 1, owner: 42 }), "Note", 1, 42).unwrap();
        assert_eq!(note.id, 1);
    }

    #[test]
    fn missing_resource_is_not_found() {
        let result = ensure_owner::<Note>(None, "Idea", 99, 42);
        assert_matches!(
            result,
            Err(CoreError::NotFound {
                entity: "Idea",
                id: 99
            })
        );
    }

    #[test]
    fn other_principal_is_forbidden() {
        let result = ensure_owner(Some(Note { id: 1, owner: 42 }), "Idea", 1, 7);
        assert_matches!(result, Err(CoreError::Forbidden(msg)) if msg.contains("idea"));
    }

    #[tokio::test]
    async fn authorize_fetches_then_checks_owner() {
        let store = store();

        let ok: Result<Note, TestError> = authorize("Note", 1, 42, |id| lookup(&store, id)).await;
        assert_eq!(ok.unwrap(), Note { id: 1, owner: 42 });

        let forbidden: Result<Note, TestError> =
            authorize("Note", 2, 42, |id| lookup(&store, id)).await;
        assert_matches!(forbidden, Err(TestError::Core(CoreError::Forbidden(_))));

        let missing: Result<Note, TestError> =
            authorize("Note", 3, 42, |id| lookup(&store, id)).await;
        assert_matches!(
            missing,
            Err(TestError::Core(CoreError::NotFound { id: 3, .. }))
        );
    }

    #[tokio::test]
    async fn every_non_owner_is_rejected() {
        let store = store();
        for principal in [0, 1, 7, 41, 43, i64::MAX] {
            let result: Result<Note, TestError> =
                authorize("Note", 1, principal, |id| lookup(&store, id)).await;
            assert_matches!(result, Err(TestError::Core(CoreError::Forbidden(_))));
        }
    }
}
