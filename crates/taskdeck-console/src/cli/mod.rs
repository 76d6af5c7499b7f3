/*
[INPUT]:  CLI command submodules
[OUTPUT]: Command implementations used by the binary
[POS]:    CLI layer - module root
[UPDATE]: When adding commands
*/

mod configure;

pub use configure::run_configure;
