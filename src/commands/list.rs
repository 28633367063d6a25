//! List lesson slots and stray files

use crate::content::loader::CourseLoader;
use crate::content::{extract_title, read_markdown_file};
use crate::CourseBuilder;

/// Print every topic slot with its status
pub fn run(builder: &CourseBuilder) {
    let loader = CourseLoader::new(builder);
    let slots = loader.slots();
    let found = slots.iter().filter(|s| s.exists).count();

    println!("Lessons in {:?} ({}/{}):", builder.source_dir, found, slots.len());
    for slot in &slots {
        if slot.exists {
            let title = extract_title(&read_markdown_file(&slot.path));
            println!("  ✅ {} - {}", slot.filename, title);
        } else {
            println!("  ⚠️ {} - missing", slot.filename);
        }
    }

    let strays = loader.stray_files();
    if !strays.is_empty() {
        println!("Unrecognized files ({}):", strays.len());
        for path in strays {
            println!("  {}", path.display());
        }
    }
}
