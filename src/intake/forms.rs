use super::{FormFields, FromForm, ValidationError};
use crate::requests::{NewBomComponent, NewMpsEntry, NewMrpEntry, NewProduct, NewWorkCenter};

impl FromForm for NewProduct {
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            sku: fields.text("sku")?,
            name: fields.text("nombre")?,
            quantity_on_hand: fields.integer("cantidad")?,
            price: fields.decimal("precio")?,
            active: fields.flag("activo")?,
            lead_time_days: fields.integer("lead_time")?,
        })
    }
}

impl FromForm for NewBomComponent {
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            material_name: fields.text("nombre")?,
            quantity_available: fields.integer("cantidad")?,
            cost: fields.decimal("costo")?,
            lead_time_days: fields.integer("lead_time")?,
        })
    }
}

impl FromForm for NewWorkCenter {
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            line_name: fields.text("linea")?,
            initial_capacity: fields.integer("capacidad")?,
            operator_count: fields.integer("operarios")?,
            throughput: fields.decimal("throughput")?,
            overtime_cost: fields.decimal("costo_extra")?,
            overtime_budget: fields.decimal("presupuesto")?,
            hiring_cost: fields.decimal("costo_contratacion")?,
            layoff_cost: fields.decimal("costo_despido")?,
            salary: fields.optional_decimal("salario")?,
        })
    }
}

impl FromForm for NewMpsEntry {
    // The schedule form labels forecast demand as `periodos`.
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            product_id: fields.integer("producto")?,
            forecast_demand: fields.integer("periodos")?,
            safety_stock: fields.decimal("inventario_seguridad")?,
            date: fields.optional_date("fecha")?,
        })
    }
}

impl FromForm for NewMrpEntry {
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError> {
        Ok(Self {
            product_id: fields.integer("producto")?,
            periods: fields.integer("periodos")?,
            scrap_percentage: fields.decimal("porcentaje_desechos")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::intake::{FormFields, FromForm, ValidationError};
    use crate::requests::{NewMpsEntry, NewProduct, NewWorkCenter};

    #[test]
    fn product_form_maps_every_field() {
        let fields: FormFields = [
            ("sku", "A1"),
            ("nombre", "Widget"),
            ("cantidad", "10"),
            ("precio", "9.99"),
            ("activo", "True"),
            ("lead_time", "5"),
        ]
        .into_iter()
        .collect();

        let product = NewProduct::from_form(&fields).expect("form should parse");
        assert_eq!(
            product,
            NewProduct {
                sku: "A1".to_string(),
                name: "Widget".to_string(),
                quantity_on_hand: 10,
                price: 9.99,
                active: true,
                lead_time_days: 5,
            }
        );
    }

    #[test]
    fn product_form_reports_first_bad_field() {
        let fields: FormFields = [
            ("sku", "A1"),
            ("nombre", "Widget"),
            ("cantidad", "diez"),
            ("precio", "9.99"),
            ("activo", "True"),
        ]
        .into_iter()
        .collect();

        let err = NewProduct::from_form(&fields).expect_err("cantidad is not a number");
        assert_eq!(err.field(), "cantidad");
    }

    #[test]
    fn work_center_form_leaves_salary_unset_when_absent() {
        let fields: FormFields = [
            ("linea", "Line 1"),
            ("capacidad", "120"),
            ("operarios", "6"),
            ("throughput", "20.5"),
            ("costo_extra", "15"),
            ("presupuesto", "900"),
            ("costo_contratacion", "300"),
            ("costo_despido", "450"),
        ]
        .into_iter()
        .collect();

        let center = NewWorkCenter::from_form(&fields).expect("form should parse");
        assert_eq!(center.line_name, "Line 1");
        assert_eq!(center.throughput, 20.5);
        assert_eq!(center.salary, None);
    }

    #[test]
    fn mps_form_takes_demand_from_periodos() {
        let fields: FormFields = [
            ("producto", "3"),
            ("periodos", "4"),
            ("inventario_seguridad", "2.5"),
        ]
        .into_iter()
        .collect();

        let entry = NewMpsEntry::from_form(&fields).expect("form should parse");
        assert_eq!(
            entry,
            NewMpsEntry {
                product_id: 3,
                forecast_demand: 4,
                safety_stock: 2.5,
                date: None,
            }
        );
    }

    #[test]
    fn mps_form_requires_a_numeric_product_id() {
        let fields: FormFields = [
            ("producto", "A1"),
            ("periodos", "4"),
            ("inventario_seguridad", "2.5"),
        ]
        .into_iter()
        .collect();

        assert!(matches!(
            NewMpsEntry::from_form(&fields),
            Err(ValidationError::Invalid { field: "producto", .. })
        ));
    }
}
