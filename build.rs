fn main() {
    // include_dir! embeds frontend/dist; cargo does not see those files on its own.
    println!("cargo:rerun-if-changed=frontend/dist");
}
