//! Shared command context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context as _, Result};
use vitrine_commerce::catalog::Catalog;
use vitrine_commerce::cart::CartStore;
use vitrine_commerce::notify::{BufferedNotifier, NoticeKind};
use vitrine_kv::FileStore;

use crate::output::Output;

/// Everything a command needs: the catalog, the restored cart, and output.
pub struct Context {
    pub catalog: Catalog,
    pub cart: CartStore<FileStore>,
    pub output: Output,
    notifier: Arc<BufferedNotifier>,
}

impl Context {
    /// Open the cart directory and restore the cart.
    pub fn load(cart_dir: Option<&Path>, output: Output) -> Result<Self> {
        let dir = match cart_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_cart_dir()?,
        };
        output.debug(&format!("cart directory: {}", dir.display()));

        let storage = FileStore::open(&dir)
            .with_context(|| format!("opening cart directory {}", dir.display()))?;

        let notifier = Arc::new(BufferedNotifier::new());
        let cart = CartStore::restore(storage).with_notifier(notifier.clone());

        Ok(Self {
            catalog: Catalog::demo(),
            cart,
            output,
            notifier,
        })
    }

    /// Print the notices the cart produced during this command.
    pub fn flush_notices(&self) {
        for notice in self.notifier.drain() {
            match notice.kind {
                NoticeKind::Success => self.output.success(&notice.message),
                NoticeKind::Warning => self.output.warn(&notice.message),
            }
        }
    }
}

fn default_cart_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("vitrine"))
        .ok_or_else(|| anyhow!("could not determine the user data directory; pass --cart-dir"))
}
