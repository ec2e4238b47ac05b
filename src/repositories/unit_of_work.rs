//! Transactional unit of work over the repository layer.

use diesel_async::scoped_futures::ScopedBoxFuture;
use diesel_async::{AsyncConnection, AsyncPgConnection};

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::repositories::{MenuRepository, OrderRepository, RecipeRepository, UserRepository};

/// Groups repository mutations into a single atomic commit.
///
/// One repository handle is exposed per aggregate type; all of them operate
/// on whichever connection [`UnitOfWork::run`] hands out, so everything done
/// inside one `run` call commits or rolls back together. No in-process
/// locking happens here; isolation between concurrent calls is delegated to
/// the database.
#[derive(Clone)]
pub struct UnitOfWork {
    pool: AsyncDbPool,
    pub menus: MenuRepository,
    pub recipes: RecipeRepository,
    pub orders: OrderRepository,
    pub users: UserRepository,
}

impl UnitOfWork {
    /// Creates a new UnitOfWork over the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            pool,
            menus: MenuRepository,
            recipes: RecipeRepository,
            orders: OrderRepository,
            users: UserRepository,
        }
    }

    /// Checks a connection out of the pool and runs `f` inside a database
    /// transaction.
    ///
    /// Returning `Err` from `f` rolls the transaction back and propagates
    /// the error; any `Ok` value commits, including the `Ok(false)` results
    /// services use for domain-level misses.
    pub async fn run<'a, R, F>(&self, f: F) -> AppResult<R>
    where
        F: for<'c> FnOnce(&'c mut AsyncPgConnection) -> ScopedBoxFuture<'a, 'c, AppResult<R>>
            + Send
            + 'a,
        R: Send + 'a,
    {
        let mut conn = self.pool.get().await?;
        let conn: &mut AsyncPgConnection = &mut conn;
        conn.transaction(f).await
    }
}
