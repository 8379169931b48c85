use js_sys::Date;
use shared::Selection;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const YEARS_BACK: i32 = 15;
const YEARS_FORWARD: i32 = 5;

/// Year options offered by the picker: the closed range
/// `[device_year - 15, device_year + 5]`, ascending.
pub fn year_options(device_year: i32) -> Vec<i32> {
    (device_year - YEARS_BACK..=device_year + YEARS_FORWARD).collect()
}

/// Month options 1..=12, ascending.
pub fn month_options() -> Vec<u32> {
    (1..=12).collect()
}

/// The device's current (year, month).
pub fn device_selection() -> Selection {
    let now = Date::new_0();
    Selection {
        year: now.get_full_year() as i32,
        // js-sys months are 0-based
        month: now.get_month() + 1,
    }
}

#[derive(Properties, PartialEq)]
pub struct MonthPickerProps {
    pub selection: Selection,
    pub on_change: Callback<Selection>,
}

/// Year and month dropdowns.
///
/// Options are generated once from the device date; re-reads pass whatever
/// the controls hold through without re-validating against that range. An
/// unparseable control value falls back to the device date.
#[function_component(MonthPicker)]
pub fn month_picker(props: &MonthPickerProps) -> Html {
    let device = device_selection();

    let on_year_change = {
        let on_change = props.on_change.clone();
        let selection = props.selection;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let year = select
                .value()
                .parse()
                .unwrap_or_else(|_| device_selection().year);
            on_change.emit(Selection { year, ..selection });
        })
    };

    let on_month_change = {
        let on_change = props.on_change.clone();
        let selection = props.selection;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let month = select
                .value()
                .parse()
                .unwrap_or_else(|_| device_selection().month);
            on_change.emit(Selection { month, ..selection });
        })
    };

    html! {
        <div class="month-picker">
            <label for="year-picker">{"Year"}</label>
            <select id="year-picker" onchange={on_year_change}>
                { for year_options(device.year).into_iter().map(|year| html! {
                    <option value={year.to_string()} selected={year == props.selection.year}>
                        { year.to_string() }
                    </option>
                }) }
            </select>

            <label for="month-picker">{"Month"}</label>
            <select id="month-picker" onchange={on_month_change}>
                { for month_options().into_iter().map(|month| html! {
                    <option value={month.to_string()} selected={month == props.selection.month}>
                        { month.to_string() }
                    </option>
                }) }
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_options_are_device_year_range() {
        let options = year_options(2024);
        assert_eq!(options.len(), 21);
        assert_eq!(options.first(), Some(&2009));
        assert_eq!(options.last(), Some(&2029));

        let mut sorted = options.clone();
        sorted.sort();
        assert_eq!(options, sorted);
    }

    #[test]
    fn test_month_options_are_one_through_twelve() {
        assert_eq!(month_options(), (1..=12).collect::<Vec<u32>>());
    }
}
