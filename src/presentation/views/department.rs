use super::format::{
    CAPITAL_UNAVAILABLE, NOT_AVAILABLE, count_or_na, surface_or_na, text_or, truncate,
};
use super::{Card, Field, Fragment, ListRow, placeholder_or};
use crate::application::Load;
use crate::domain::entities::{Department, DepartmentId};
use crate::infrastructure::DepartmentImageLoader;

const DESCRIPTION_LIMIT: usize = 400;
const NO_DESCRIPTION: &str = "Descripción no disponible.";
const NO_DEPARTMENTS: &str = "No hay departamentos";

fn municipalities(department: &Department) -> String {
    department
        .municipalities()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| m.to_string())
}

/// Selectable department list of the selected region.
#[must_use]
pub fn department_list(load: Load<&Vec<Department>>, active: Option<DepartmentId>) -> Fragment {
    let departments = match placeholder_or(load) {
        Ok(departments) => departments,
        Err(placeholder) => return placeholder,
    };

    if departments.is_empty() {
        return Fragment::muted(NO_DEPARTMENTS);
    }

    Fragment::List(
        departments
            .iter()
            .map(|department| ListRow {
                key: department.id().as_u32(),
                title: department.name().to_string(),
                subtitle: Some(format!("municipios: {}", municipalities(department))),
                active: Some(department.id()) == active,
            })
            .collect(),
    )
}

/// Detail panel of one department, summary or detailed variant alike.
#[must_use]
pub fn department_detail_panel(load: Load<&Department>) -> Fragment {
    let department = match placeholder_or(load) {
        Ok(department) => department,
        Err(placeholder) => return placeholder,
    };

    Fragment::Card(Card {
        title: department.name().to_string(),
        body: department
            .description()
            .map_or_else(|| NO_DESCRIPTION.to_string(), |d| truncate(d, DESCRIPTION_LIMIT)),
        fields: vec![
            Field::new("Capital", text_or(department.capital(), CAPITAL_UNAVAILABLE)),
            Field::new("Municipios", municipalities(department)),
            Field::new("Superficie", surface_or_na(department.surface())),
            Field::new("Población", count_or_na(department.population())),
            Field::new(
                "Prefijo telefónico",
                text_or(department.phone_prefix(), NOT_AVAILABLE),
            ),
        ],
        image: Some(DepartmentImageLoader::relative_path(
            &department.image_key(),
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::test_support::*;

    #[test]
    fn test_summary_detail_for_choco() {
        let summary = Department::new(5, "Chocó").with_municipalities(30);
        let card = expect_card(department_detail_panel(Load::Ready(&summary)));

        assert_eq!(card.title, "Chocó");
        assert_eq!(card.field("Municipios"), Some("30"));
        assert_eq!(card.field("Población"), Some("N/A"));
        assert_eq!(card.field("Superficie"), Some("N/A"));
        assert_eq!(card.field("Prefijo telefónico"), Some("N/A"));
        assert_eq!(card.field("Capital"), Some("No disponible"));
        assert_eq!(card.image.as_deref(), Some("img/chocó.png"));
    }

    #[test]
    fn test_detailed_department() {
        let detailed = Department::new(2, "Antioquia")
            .with_description("d".repeat(500))
            .with_capital("Medellín")
            .with_municipalities(125)
            .with_surface(63612.0)
            .with_population(6_407_102)
            .with_phone_prefix("604");

        let card = expect_card(department_detail_panel(Load::Ready(&detailed)));

        assert_eq!(card.field("Capital"), Some("Medellín"));
        assert_eq!(card.field("Superficie"), Some("63.612 km²"));
        assert_eq!(card.field("Población"), Some("6.407.102"));
        assert_eq!(card.field("Prefijo telefónico"), Some("604"));
        assert_eq!(card.body.chars().count(), DESCRIPTION_LIMIT + 3);
    }

    #[test]
    fn test_detail_never_has_empty_field_values() {
        let bare = Department::new(1, "Amazonas");
        let card = expect_card(department_detail_panel(Load::Ready(&bare)));

        assert!(card.fields.iter().all(|f| !f.value.is_empty()));
    }

    #[test]
    fn test_list_rows_show_municipality_count() {
        let deps = vec![
            Department::new(5, "Chocó").with_municipalities(30),
            Department::new(6, "Nariño"),
        ];

        let Fragment::List(rows) = department_list(Load::Ready(&deps), Some(DepartmentId(5)))
        else {
            panic!("expected list");
        };

        assert_eq!(rows[0].subtitle.as_deref(), Some("municipios: 30"));
        assert_eq!(rows[1].subtitle.as_deref(), Some("municipios: N/A"));
        assert!(rows[0].active);
        assert!(!rows[1].active);
    }

    #[test]
    fn test_empty_department_list() {
        let deps = Vec::new();
        let fragment = department_list(Load::Ready(&deps), None);
        assert_eq!(placeholder_text(&fragment), Some(NO_DEPARTMENTS));
    }

    #[test]
    fn test_loading_detail_placeholder() {
        let fragment = department_detail_panel(Load::Loading("Cargando detalle del departamento..."));
        assert_eq!(
            placeholder_text(&fragment),
            Some("Cargando detalle del departamento...")
        );
    }
}
