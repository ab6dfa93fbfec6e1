use crate::cli::ListArgs;
use crate::error::Result;
use crate::render;
use atomstyles::StyleRegistry;

pub fn run(args: ListArgs, registry: &StyleRegistry) -> Result<()> {
    print!("{}", render::style_list(registry, args.deprecated));
    Ok(())
}
