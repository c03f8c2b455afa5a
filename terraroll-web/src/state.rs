//! UI-independent randomizer session: the loaded engine, toggle state and the
//! latest bundle. Components hold it behind a `Rc<RefCell<_>>`.

use terraroll_core::{
    ActiveFlags, Category, ConfigLoadError, RandomSource, ResultBundle, SelectionEngine,
};

/// Toast shown when `config.json` cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str =
    "Не удалось загрузить конфигурацию. Проверьте файл config.json";

/// Toast shown when randomize is triggered before configuration loaded.
pub const NOT_LOADED_MESSAGE: &str = "Конфигурация не загружена";

/// Console line for a failed configuration load, carrying the reason tag.
#[must_use]
pub fn load_failure_detail(err: &ConfigLoadError) -> String {
    format!("configuration load failed ({}): {err}", err.reason())
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: Option<SelectionEngine>,
    flags: ActiveFlags,
    bundle: Option<ResultBundle>,
    generation: u32,
    load_failed: bool,
}

impl Session {
    /// Install a freshly loaded engine and reset toggles to the stored `enabled` flags.
    pub fn install(&mut self, engine: SelectionEngine) {
        self.flags = ActiveFlags::from_store(engine.store());
        self.engine = Some(engine);
        self.load_failed = false;
    }

    /// Record a failed load. A previously installed engine stays usable.
    pub const fn mark_load_failed(&mut self) {
        self.load_failed = true;
    }

    /// True while the last load failed and no reload is in flight.
    #[must_use]
    pub const fn can_retry_load(&self) -> bool {
        self.load_failed
    }

    /// Claim the retry; returns false when one is already running.
    pub const fn begin_reload(&mut self) -> bool {
        let claimed = self.load_failed;
        self.load_failed = false;
        claimed
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.engine.is_some()
    }

    #[must_use]
    pub const fn flags(&self) -> ActiveFlags {
        self.flags
    }

    pub const fn toggle(&mut self, category: Category, active: bool) {
        self.flags.set(category, active);
    }

    #[must_use]
    pub const fn bundle(&self) -> Option<&ResultBundle> {
        self.bundle.as_ref()
    }

    /// Bumped on every successful run so result cards replay their entrance.
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Run the engine with the current toggles.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when no configuration is loaded or the
    /// selection fails; the previous bundle is kept in that case.
    pub fn randomize<R>(&mut self, rng: &mut R) -> Result<&ResultBundle, String>
    where
        R: RandomSource + ?Sized,
    {
        let engine = self
            .engine
            .as_mut()
            .ok_or_else(|| NOT_LOADED_MESSAGE.to_string())?;
        let bundle = engine
            .randomize(&self.flags, rng)
            .map_err(|err| format!("Ошибка рандомизации: {err}"))?;
        self.generation = self.generation.wrapping_add(1);
        Ok(self.bundle.insert(bundle))
    }
}
