fn main() {
    slint_build::compile("ui/appwindow.slint").expect("failed to compile ui/appwindow.slint");
}
