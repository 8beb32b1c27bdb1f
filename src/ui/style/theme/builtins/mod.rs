mod amber;
mod cyber;
mod mono;

pub use amber::AMBER;
pub use cyber::CYBER;
pub use mono::MONO;

use super::types::ThemeDefinition;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[cyber::DEFINITION, amber::DEFINITION, mono::DEFINITION];
