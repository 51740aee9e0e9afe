//! Motor de comisiones
//!
//! Funciones puras sobre registros de venta ya confirmados. El tier de un
//! vendedor clasifica su volumen acumulado; es informativo y no altera la
//! tasa de las ventas individuales.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::sale::Sale;

/// Tasa de comisión por defecto (5%)
pub fn default_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Tier de comisión de un vendedor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionTier {
    pub tier: &'static str,
    pub name: &'static str,
    pub rate: Decimal,
}

/// Comisión de una venta individual.
///
/// `max(0, (sale_price - trade_in_value) * rate)`. Un precio no positivo no
/// genera comisión, y un trade-in mayor que el precio nunca produce una
/// comisión negativa.
pub fn calculate_commission(
    sale_price: Decimal,
    trade_in_value: Decimal,
    rate: Decimal,
) -> Decimal {
    if sale_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let net_amount = sale_price - trade_in_value;
    let amount = net_amount * rate;

    amount.max(Decimal::ZERO)
}

/// Tier según el volumen acumulado de ventas.
///
/// Los límites inferiores son inclusivos: exactamente 500000 ya es platinum.
pub fn commission_tier(total_sales: Decimal) -> CommissionTier {
    if total_sales >= Decimal::from(500_000) {
        CommissionTier {
            tier: "platinum",
            name: "Platinum",
            rate: Decimal::new(8, 2),
        }
    } else if total_sales >= Decimal::from(250_000) {
        CommissionTier {
            tier: "gold",
            name: "Gold",
            rate: Decimal::new(6, 2),
        }
    } else if total_sales >= Decimal::from(100_000) {
        CommissionTier {
            tier: "silver",
            name: "Silver",
            rate: Decimal::new(5, 2),
        }
    } else {
        CommissionTier {
            tier: "bronze",
            name: "Bronze",
            rate: Decimal::new(3, 2),
        }
    }
}

/// Suma de comisiones de un conjunto de ventas.
///
/// Cada venta aporta su propia comisión a la tasa por defecto; el tier del
/// vendedor no se aplica aquí.
pub fn total_commission(sales: &[Sale]) -> Decimal {
    sales
        .iter()
        .map(|sale| {
            calculate_commission(
                sale.sale_price,
                sale.trade_in_value.unwrap_or(Decimal::ZERO),
                default_rate(),
            )
        })
        .sum()
}

/// Volumen total vendido (precio bruto, sin descontar trade-ins).
pub fn total_sales_volume(sales: &[Sale]) -> Decimal {
    sales.iter().map(|sale| sale.sale_price).sum()
}

/// Formatear un importe de comisión: dos decimales, separador de miles y
/// prefijo de moneda.
pub fn format_commission(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let formatted = format!("{:.2}", rounded.abs());

    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sale::SaleStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn sale_with(price: i64, trade_in: Option<i64>) -> Sale {
        Sale {
            id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            vehicle_id: None,
            salesperson_id: None,
            sale_price: Decimal::from(price),
            financing_type: "cash".to_string(),
            trade_in_value: trade_in.map(Decimal::from),
            warranty_package: None,
            delivery_date: None,
            status: SaleStatus::Completed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_calculate_commission() {
        let rate = Decimal::new(5, 2);
        assert_eq!(
            calculate_commission(Decimal::from(20_000), Decimal::from(5_000), rate),
            Decimal::from(750)
        );
    }

    #[test]
    fn test_commission_clamped_to_zero() {
        let rate = Decimal::new(5, 2);
        // trade-in mayor que el precio: neto negativo, comisión 0
        assert_eq!(
            calculate_commission(Decimal::from(1_000), Decimal::from(5_000), rate),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_commission_zero_price() {
        let rate = Decimal::new(5, 2);
        assert_eq!(
            calculate_commission(Decimal::ZERO, Decimal::ZERO, rate),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_commission(Decimal::from(-100), Decimal::ZERO, rate),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_tier_boundaries_inclusive() {
        let platinum = commission_tier(Decimal::from(500_000));
        assert_eq!(platinum.tier, "platinum");
        assert_eq!(platinum.rate, Decimal::new(8, 2));

        let gold = commission_tier(Decimal::from(499_999));
        assert_eq!(gold.tier, "gold");
        assert_eq!(gold.rate, Decimal::new(6, 2));

        assert_eq!(commission_tier(Decimal::from(250_000)).tier, "gold");
        assert_eq!(commission_tier(Decimal::from(100_000)).tier, "silver");
        assert_eq!(commission_tier(Decimal::from(99_999)).tier, "bronze");
        assert_eq!(commission_tier(Decimal::ZERO).tier, "bronze");
    }

    #[test]
    fn test_total_commission_ignores_tier() {
        let sales = vec![
            sale_with(20_000, Some(5_000)), // 750
            sale_with(10_000, None),        // 500
            sale_with(1_000, Some(5_000)),  // 0 (neto negativo)
        ];
        assert_eq!(total_commission(&sales), Decimal::from(1_250));
    }

    #[test]
    fn test_total_sales_volume() {
        let sales = vec![sale_with(20_000, Some(5_000)), sale_with(10_000, None)];
        assert_eq!(total_sales_volume(&sales), Decimal::from(30_000));
    }

    #[test]
    fn test_format_commission() {
        assert_eq!(format_commission(Decimal::from(750)), "$750.00");
        assert_eq!(format_commission(Decimal::new(123456789, 2)), "$1,234,567.89");
        assert_eq!(format_commission(Decimal::ZERO), "$0.00");
        assert_eq!(format_commission(Decimal::new(15, 1)), "$1.50");
    }
}
