pub mod classify;
pub mod config;
pub mod hook;
pub mod hooklog;
pub mod placer;
pub mod testing;

pub use classify::{plan, ClassifyError, MediaKind, SeriesMatcher, SortDecision};
pub use config::{
    load_config, load_config_from_env, load_config_from_str, validate_config, ClassifyConfig,
    Config, ConfigError, ExitPolicy, HookConfig, LogConfig, LogFormat, PathsConfig, StripMode,
};
pub use hook::{HookError, HookOutcome, HookRunner, Invocation};
pub use hooklog::{FileHookLog, HookEvent, HookLog, NullHookLog};
pub use placer::{FsPlacer, MoveFailureKind, PlacedFile, PlacementJob, Placer, PlacerConfig, PlacerError};
