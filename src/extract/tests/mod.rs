//! Shared fixtures for extractor tests


/// One `<tr>` with a cell per value
pub fn html_row(values: &[&str]) -> String {
    let cells: String = values.iter().map(|v| format!("<td>{v}</td>")).collect();
    format!("<tr>{cells}</tr>\n")
}

/// Eleven standard values for a finisher
pub fn standard_values<'a>(place: &'a str, state: &'a str) -> Vec<&'a str> {
    vec![
        place, "Ann", "Lee", "34", "1", "F", "3:10:05", "7:15", "Memphis", state, "101",
    ]
}

/// Results page with a header row, three finishers and one short row
pub fn create_results_html() -> String {
    let mut html = String::from(
        "<html><head><title>Results</title></head><body>\n<table>\n\
         <tr><th>Place</th><th>Name</th><th>Age</th><th>Sex/plc</th><th>Sex</th>\
         <th>Time</th><th>Pace</th><th>City</th><th>State</th><th>Bib No</th></tr>\n",
    );
    html.push_str(&html_row(&standard_values("1", "TN")));
    html.push_str(&html_row(&standard_values("2", "TN")));
    html.push_str(&html_row(&["3", "Bo", "Ray", "41", "1", "M", "3:20:00"]));
    html.push_str(&html_row(&standard_values("4", "MS")));
    html.push_str("</table></body></html>\n");
    html
}

/// Whitespace dump: header, dashed rule, two finishers
pub fn create_results_text() -> String {
    "Place First   Last  Age Sexpl Sex Time    Pace City     State Bib\n\
     ----- ----- ----- --- ----- --- ------- ---- -------- ----- ---\n\
     1     Ann   Lee   34  1     F   3:10:05 7:15 Memphis  TN    101\n\
     2     Bo    Ray   41  1     M   3:20:00 7:38 Oxford   MS    102\n"
        .to_string()
}

/// Fixed-column dump: label line, underline, then aligned rows
pub fn create_results_fixed() -> String {
    [
        "Place First      Last       Age Sexpl Sex Time     Pace  City         State Bib",
        "===== ========== ========== === ===== === ======== ===== ============ ===== =====",
        "1     Ann        Lee        34  1     F   3:10:05  7:15  Memphis      TN    101",
        "2     Mary Beth  Van Dyke   29  2     F   3:15:41  7:28  Little Rock  AR    118",
        "3     Bo         Ray        41  1     M   3:20:00  7:38  Oxford       MS    102",
        "",
        "Place First      Last       Age Sexpl Sex Time     Pace  City         State Bib",
        "4     Short      Row",
    ]
    .join("\n")
}
