use crate::cli::SectionsArgs;
use crate::error::Result;
use crate::render;

pub fn run(args: SectionsArgs) -> Result<()> {
    if args.names.is_empty() {
        print!("{}", render::section_list());
    } else {
        print!("{}", render::section_report(&args.names));
    }
    Ok(())
}
