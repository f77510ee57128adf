use web_sys as web;

#[inline]
pub fn hide(splash: &web::Element) {
    _ = splash.class_list().add_1("hidden");
}

#[inline]
pub fn is_hidden(splash: &web::Element) -> bool {
    splash.class_list().contains("hidden")
}
