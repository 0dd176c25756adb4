use css_utility::prelude::*;
use css_utility::{BreakpointStrategy, DeviceBreakpoint, ScreenBreakpoint};
use pretty_assertions::assert_eq;

#[test]
fn card_attributes_mix_both_families() {
    let shadow = BoxShadow::small().large().on_laptop();
    let spacing = Padding::all(SpaceSize::S2).padding(Side::All, SpaceSize::S4).on_tablet();
    let corners = Rounded::md().lg().on_md();

    let class = ClassList::new()
        .add("card")
        .add_builder(&shadow)
        .add_builder(&spacing)
        .add_builder(&corners)
        .build();
    assert_eq!(
        class,
        "card shadow-sm shadow-lg-lg p-2 p-md-4 rounded-md md:rounded-lg"
    );

    let style = StyleList::new()
        .add_builder(&Opacity::v90())
        .add_builder(&corners)
        .add("max-width", "32rem")
        .build();
    assert_eq!(style, "opacity: .9; max-width: 32rem");
}

#[test]
fn every_device_breakpoint_is_reachable() {
    let builder = Display::none()
        .on_phone()
        .block()
        .on_tablet()
        .flex()
        .on_laptop()
        .grid()
        .on_desktop()
        .table()
        .on_widescreen()
        .inline()
        .on_ultrawide();
    assert_eq!(
        builder.to_class(),
        "d-sm-none d-md-block d-lg-flex d-xl-grid d-xxl-table d-xxxl-inline"
    );
    assert!(builder
        .rules()
        .iter()
        .all(|rule| rule.breakpoint().is_some()));
    assert_eq!(
        builder.rules().last().and_then(|rule| rule.breakpoint()),
        Some(DeviceBreakpoint::Ultrawide)
    );
}

#[test]
fn every_screen_breakpoint_is_reachable() {
    let builder = TextStyle::size(TextSize::Xs)
        .on_sm()
        .size(TextSize::Sm)
        .on_md()
        .size(TextSize::Base)
        .on_lg()
        .size(TextSize::Lg)
        .on_xl()
        .size(TextSize::Xl)
        .on_2xl();
    assert_eq!(
        builder.to_class(),
        "sm:text-xs md:text-sm lg:text-base xl:text-lg 2xl:text-xl"
    );
    assert_eq!(
        builder.rules()[4].breakpoint(),
        Some(ScreenBreakpoint::Xxl)
    );
}

#[test]
fn strategies_stay_distinct_for_the_same_class() {
    assert_eq!(
        BreakpointStrategy::Midfix.apply("rounded-lg", "md"),
        "rounded-md-lg"
    );
    assert_eq!(
        BreakpointStrategy::Prefix.apply("rounded-lg", "md"),
        "md:rounded-lg"
    );
}

#[test]
fn builders_render_through_display() {
    let builder = Margin::auto_x().margin(Side::Y, SpaceSize::S5);
    assert_eq!(format!("{builder}"), "mx-auto my-5");
}
