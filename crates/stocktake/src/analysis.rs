//! Canned analytical queries and their chart bindings.
//!
//! Purely presentational: each analysis is a fixed aggregation whose
//! result rows get bound into a tabular structure and handed to the
//! chart renderer with a fixed chart type. Requires a SQL-backed
//! store; the in-memory store refuses aggregates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::Store;
use crate::value::Row;

/// Chart type a renderer is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

/// One fixed chart over an analysis result: which columns feed which
/// axes, and how to draw them.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBinding {
    pub kind: ChartKind,
    pub title: &'static str,
    /// Column for the x axis (category/name column for pies).
    pub x: &'static str,
    /// Column for the y axis (value column for pies).
    pub y: &'static str,
}

/// Result rows bound into a tabular structure for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// A completed analysis: the bound data plus its chart bindings.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis: String,
    pub data: ChartData,
    pub charts: Vec<ChartBinding>,
}

/// The six fixed analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Analysis {
    OutOfStock,
    SalesTrend,
    DeadStock,
    Returns,
    EmployeePerformance,
    StoreComparison,
}

impl Analysis {
    pub const ALL: [Analysis; 6] = [
        Analysis::OutOfStock,
        Analysis::SalesTrend,
        Analysis::DeadStock,
        Analysis::Returns,
        Analysis::EmployeePerformance,
        Analysis::StoreComparison,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Analysis::OutOfStock => "Out of Stock Analysis",
            Analysis::SalesTrend => "Sales Trends by Time",
            Analysis::DeadStock => "Dead Stock Analysis",
            Analysis::Returns => "Return and Refund Trends",
            Analysis::EmployeePerformance => "Employee Sales Performance",
            Analysis::StoreComparison => "Store-Level Comparison",
        }
    }

    /// The aggregation, verbatim.
    pub fn query(&self) -> &'static str {
        match self {
            Analysis::OutOfStock => {
                "SELECT p.name, p.category, o.demand_date, o.missed_quantity \
                 FROM OutOfStockLog o \
                 JOIN Product p ON o.product_id = p.product_id \
                 ORDER BY o.demand_date DESC"
            }
            Analysis::SalesTrend => {
                "SELECT DATE(sale_date) as date, COUNT(*) as sales_count, \
                 SUM(total_amount) as revenue \
                 FROM Sales \
                 GROUP BY DATE(sale_date) \
                 ORDER BY date DESC \
                 LIMIT 30"
            }
            Analysis::DeadStock => {
                "SELECT p.name, p.category, d.days_unsold, p.current_stock, \
                 (p.current_stock * p.cost_price) as tied_capital \
                 FROM DeadStock d \
                 JOIN Product p ON d.product_id = p.product_id \
                 WHERE d.days_unsold > 30 \
                 ORDER BY d.days_unsold DESC"
            }
            Analysis::Returns => {
                "SELECT p.name, p.category, r.reason, COUNT(*) as return_count \
                 FROM Returns r \
                 JOIN Product p ON r.product_id = p.product_id \
                 GROUP BY p.product_id, r.reason \
                 ORDER BY return_count DESC"
            }
            Analysis::EmployeePerformance => {
                "SELECT e.name, COUNT(s.sale_id) as sales_count, \
                 SUM(s.total_amount) as total_revenue \
                 FROM Employee e \
                 LEFT JOIN Sales s ON e.employee_id = s.employee_id \
                 GROUP BY e.employee_id \
                 ORDER BY total_revenue DESC"
            }
            Analysis::StoreComparison => {
                "SELECT st.location, COUNT(s.sale_id) as sales_count, \
                 SUM(s.total_amount) as revenue \
                 FROM Store st \
                 LEFT JOIN Employee e ON st.store_id = e.store_id \
                 LEFT JOIN Sales s ON e.employee_id = s.employee_id \
                 GROUP BY st.store_id \
                 ORDER BY revenue DESC"
            }
        }
    }

    /// Column names of the result rows, in select-list order.
    pub fn result_columns(&self) -> &'static [&'static str] {
        match self {
            Analysis::OutOfStock => &["name", "category", "demand_date", "missed_quantity"],
            Analysis::SalesTrend => &["date", "sales_count", "revenue"],
            Analysis::DeadStock => &[
                "name",
                "category",
                "days_unsold",
                "current_stock",
                "tied_capital",
            ],
            Analysis::Returns => &["name", "category", "reason", "return_count"],
            Analysis::EmployeePerformance => &["name", "sales_count", "total_revenue"],
            Analysis::StoreComparison => &["location", "sales_count", "revenue"],
        }
    }

    /// Fixed chart bindings. SalesTrend draws two figures; the rest
    /// draw one.
    pub fn charts(&self) -> Vec<ChartBinding> {
        match self {
            Analysis::OutOfStock => vec![ChartBinding {
                kind: ChartKind::Bar,
                title: "Missed Sales by Category",
                x: "category",
                y: "missed_quantity",
            }],
            Analysis::SalesTrend => vec![
                ChartBinding {
                    kind: ChartKind::Line,
                    title: "Daily Revenue Trend",
                    x: "date",
                    y: "revenue",
                },
                ChartBinding {
                    kind: ChartKind::Bar,
                    title: "Daily Sales Count",
                    x: "date",
                    y: "sales_count",
                },
            ],
            Analysis::DeadStock => vec![ChartBinding {
                kind: ChartKind::Scatter,
                title: "Dead Stock: Days Unsold vs Capital Tied",
                x: "days_unsold",
                y: "tied_capital",
            }],
            Analysis::Returns => vec![ChartBinding {
                kind: ChartKind::Pie,
                title: "Returns by Reason",
                x: "reason",
                y: "return_count",
            }],
            Analysis::EmployeePerformance => vec![ChartBinding {
                kind: ChartKind::Bar,
                title: "Employee Sales Performance",
                x: "name",
                y: "total_revenue",
            }],
            Analysis::StoreComparison => vec![ChartBinding {
                kind: ChartKind::Bar,
                title: "Revenue by Store Location",
                x: "location",
                y: "revenue",
            }],
        }
    }

    /// Execute against the store and bind the result for rendering.
    pub fn run(&self, store: &dyn Store) -> Result<AnalysisReport> {
        let rows = store.query(self.query(), &[])?;
        Ok(AnalysisReport {
            analysis: self.label().to_string(),
            data: ChartData {
                columns: self
                    .result_columns()
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                rows,
            },
            charts: self.charts(),
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Analysis::OutOfStock => "out-of-stock",
            Analysis::SalesTrend => "sales-trend",
            Analysis::DeadStock => "dead-stock",
            Analysis::Returns => "returns",
            Analysis::EmployeePerformance => "employee-performance",
            Analysis::StoreComparison => "store-comparison",
        };
        f.write_str(name)
    }
}

impl FromStr for Analysis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "out-of-stock" => Ok(Analysis::OutOfStock),
            "sales-trend" => Ok(Analysis::SalesTrend),
            "dead-stock" => Ok(Analysis::DeadStock),
            "returns" => Ok(Analysis::Returns),
            "employee-performance" => Ok(Analysis::EmployeePerformance),
            "store-comparison" => Ok(Analysis::StoreComparison),
            other => Err(format!(
                "unknown analysis '{other}' (expected one of: {})",
                Analysis::ALL
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_six_analyses_with_fixed_bindings() {
        assert_eq!(Analysis::ALL.len(), 6);
        for analysis in Analysis::ALL {
            assert!(!analysis.charts().is_empty());
            assert!(!analysis.result_columns().is_empty());
        }
    }

    #[test]
    fn test_chart_kinds_match_menu() {
        assert_eq!(Analysis::OutOfStock.charts()[0].kind, ChartKind::Bar);
        assert_eq!(Analysis::SalesTrend.charts()[0].kind, ChartKind::Line);
        assert_eq!(Analysis::SalesTrend.charts()[1].kind, ChartKind::Bar);
        assert_eq!(Analysis::DeadStock.charts()[0].kind, ChartKind::Scatter);
        assert_eq!(Analysis::Returns.charts()[0].kind, ChartKind::Pie);
    }

    #[test]
    fn test_query_shapes() {
        assert!(Analysis::SalesTrend.query().contains("LIMIT 30"));
        assert!(Analysis::DeadStock.query().contains("days_unsold > 30"));
        assert!(Analysis::Returns.query().contains("GROUP BY p.product_id, r.reason"));
        for analysis in Analysis::ALL {
            // Every chart axis must name a result column
            for chart in analysis.charts() {
                assert!(analysis.result_columns().contains(&chart.x));
                assert!(analysis.result_columns().contains(&chart.y));
            }
        }
    }

    #[test]
    fn test_round_trip_names() {
        for analysis in Analysis::ALL {
            let parsed: Analysis = analysis.to_string().parse().unwrap();
            assert_eq!(parsed, analysis);
        }
        assert!("bogus".parse::<Analysis>().is_err());
    }

    #[test]
    fn test_memory_store_refuses_aggregates() {
        let store = MemoryStore::with_retail_schema();
        assert!(Analysis::SalesTrend.run(&store).is_err());
    }
}
