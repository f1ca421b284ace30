use admissions_desk::dataset::Dataset;
use admissions_desk::engine::{
    aggregate, evaluate, filter, record_rates, tally, FilterSpec, MetricDef, MetricValue,
    Precision, Predicate,
};
use admissions_desk::records::{Application, Student, StudentStatus};

fn acceptance_rate() -> MetricDef {
    MetricDef::percentage(
        "acceptance_rate",
        Predicate::equals("status", "accepted"),
        Predicate::All,
        Precision::Whole,
    )
}

#[test]
fn acceptance_rate_over_sample_applications() {
    let dataset = Dataset::sample();
    let metrics = aggregate(
        &dataset.applications,
        &[
            MetricDef::count("total", Predicate::All),
            MetricDef::count("accepted", Predicate::equals("status", "accepted")),
            acceptance_rate(),
        ],
    );

    assert_eq!(metrics.count("total"), 5);
    assert_eq!(metrics.count("accepted"), 2);
    assert_eq!(
        metrics.get("acceptance_rate").map(|value| value.as_f64()),
        Some(40.0)
    );
}

#[test]
fn capacity_rates_round_half_up_per_event() {
    let dataset = Dataset::sample();
    let completed = filter(
        &dataset.events,
        &FilterSpec::new().field("status", "completed"),
    );

    let rates = record_rates(&completed, "registered_count", "capacity", Precision::Whole);
    assert_eq!(rates, vec![85.0, 93.0, 75.0, 90.0]);
}

#[test]
fn planned_event_without_turnout_rates_zero() {
    let dataset = Dataset::sample();
    let rates = record_rates(
        &dataset.events,
        "attended_count",
        "registered_count",
        Precision::Whole,
    );
    assert_eq!(rates.last(), Some(&0.0));
    assert_eq!(rates.len(), dataset.events.len());
}

#[test]
fn empty_collection_aggregates_to_zero() {
    let students: Vec<Student> = Vec::new();
    let metrics = aggregate(
        &students,
        &[
            MetricDef::count("total", Predicate::All),
            MetricDef::percentage(
                "conversion_rate",
                Predicate::equals("status", "enrolled"),
                Predicate::All,
                Precision::Tenths,
            ),
            MetricDef::sum("ids", "id"),
        ],
    );

    assert_eq!(metrics.count("total"), 0);
    assert_eq!(
        metrics.get("conversion_rate"),
        Some(MetricValue::Percent {
            value: 0.0,
            precision: Precision::Tenths
        })
    );
    assert_eq!(metrics.total("ids"), 0);
}

#[test]
fn zero_matching_denominator_is_zero_percent() {
    let dataset = Dataset::sample();
    let metrics = aggregate(
        &dataset.applications,
        &[MetricDef::percentage(
            "accepted_of_waitlisted",
            Predicate::equals("status", "accepted"),
            Predicate::equals("status", "waitlisted"),
            Precision::Whole,
        )],
    );
    assert_eq!(
        metrics.get("accepted_of_waitlisted").map(|value| value.as_f64()),
        Some(0.0)
    );
}

#[test]
fn tenths_precision_keeps_one_decimal() {
    let mut students = Dataset::sample().students;
    let template = students[2].clone();
    for id in 10..14 {
        let mut enrolled = template.clone();
        enrolled.id = id;
        students.push(enrolled);
    }
    // 5 enrolled of 8
    let metrics = aggregate(
        &students,
        &[MetricDef::percentage(
            "conversion_rate",
            Predicate::equals("status", "enrolled"),
            Predicate::All,
            Precision::Tenths,
        )],
    );
    let value = metrics.get("conversion_rate").expect("metric present");
    assert_eq!(value.as_f64(), 62.5);
    assert_eq!(value.to_string(), "62.5%");

    let metrics = aggregate(
        &students,
        &[MetricDef::percentage(
            "all_but_first",
            Predicate::equals("id", "1").negate(),
            Predicate::All,
            Precision::Tenths,
        )],
    );
    assert_eq!(
        metrics.get("all_but_first").map(|value| value.to_string()),
        Some("87.5%".to_string())
    );
}

#[test]
fn exact_half_percentages_round_up() {
    let template = Dataset::sample().students[0].clone();
    let students: Vec<Student> = (0..80)
        .map(|id| {
            let mut student = template.clone();
            student.id = id;
            if id < 23 {
                student.status = StudentStatus::Enrolled;
            }
            student
        })
        .collect();
    let enrolled = || Predicate::equals("status", "enrolled");

    let metrics = aggregate(
        &students,
        &[MetricDef::percentage(
            "conversion_rate",
            enrolled(),
            Predicate::All,
            Precision::Tenths,
        )],
    );
    assert_eq!(
        metrics.get("conversion_rate").map(|value| value.to_string()),
        Some("28.8%".to_string())
    );

    let metrics = aggregate(
        &students[..40],
        &[MetricDef::percentage(
            "enrollment_rate",
            enrolled(),
            Predicate::All,
            Precision::Whole,
        )],
    );
    assert_eq!(
        metrics.get("enrollment_rate").map(|value| value.as_f64()),
        Some(58.0)
    );
}

#[test]
fn one_of_and_negated_predicates() {
    let dataset = Dataset::sample();
    let pending = Predicate::one_of("status", ["submitted", "under_review"]);
    let metrics = aggregate(
        &dataset.applications,
        &[
            MetricDef::count("pending", pending.clone()),
            MetricDef::count("decided", pending.negate()),
            MetricDef::count("missing_field", Predicate::equals("campus", "north")),
            MetricDef::count("with_decision", Predicate::equals("decided", "true")),
        ],
    );

    assert_eq!(metrics.count("pending"), 2);
    assert_eq!(metrics.count("decided"), 3);
    assert_eq!(metrics.count("missing_field"), 0);
    assert_eq!(metrics.count("with_decision"), 3);
}

#[test]
fn scope_selects_full_or_filtered_collection() {
    let dataset = Dataset::sample();
    let spec = FilterSpec::new().field("program", "Computer Science");
    let view = evaluate(
        &dataset.applications,
        &spec,
        &[
            MetricDef::count("total", Predicate::All),
            MetricDef::count("matching", Predicate::All).filtered(),
            acceptance_rate(),
            MetricDef::percentage(
                "program_acceptance_rate",
                Predicate::equals("status", "accepted"),
                Predicate::All,
                Precision::Whole,
            )
            .filtered(),
        ],
    );

    assert_eq!(view.matches.len(), 2);
    assert_eq!(view.metrics.count("total"), 5);
    assert_eq!(view.metrics.count("matching"), 2);
    assert_eq!(
        view.metrics.get("acceptance_rate").map(|v| v.as_f64()),
        Some(40.0)
    );
    assert_eq!(
        view.metrics
            .get("program_acceptance_rate")
            .map(|v| v.as_f64()),
        Some(50.0)
    );
}

#[test]
fn sum_totals_numeric_field() {
    let dataset = Dataset::sample();
    let metrics = aggregate(
        &dataset.events,
        &[
            MetricDef::sum("attendees", "attended_count"),
            MetricDef::sum("names", "name"),
        ],
    );
    assert_eq!(metrics.total("attendees"), 274);
    assert_eq!(metrics.total("names"), 0);
}

#[test]
fn tally_counts_in_first_seen_order() {
    let dataset = Dataset::sample();
    let programs = tally(&dataset.applications, "program");
    let summary: Vec<(&str, usize)> = programs
        .iter()
        .map(|entry| (entry.value.as_str(), entry.count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Computer Science", 2),
            ("Web Development", 2),
            ("Data Science", 1)
        ]
    );

    let applications: Vec<Application> = Vec::new();
    assert!(tally(&applications, "program").is_empty());
}

#[test]
fn metrics_serialize_as_plain_numbers() {
    let dataset = Dataset::sample();
    let metrics = aggregate(
        &dataset.applications,
        &[MetricDef::count("total", Predicate::All), acceptance_rate()],
    );
    let json = serde_json::to_value(&metrics).expect("serializes");
    assert_eq!(json["total"], 5);
    assert_eq!(json["acceptance_rate"], 40.0);
}
