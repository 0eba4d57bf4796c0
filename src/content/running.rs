use crate::models::{Exercise, PhaseWorkouts, PlanType, Workout, WorkoutPlan};

const MOBILITY: Workout = Workout {
    title: "Running mobility",
    exercises: &[
        Exercise {
            name: "Leg swings",
            description: "10 each leg, front-to-back and side-to-side",
            icon: "leg",
        },
        Exercise {
            name: "Hip circles",
            description: "10 each direction",
            icon: "hip",
        },
        Exercise {
            name: "Ankle rolls",
            description: "30 seconds each ankle",
            icon: "ankle",
        },
        Exercise {
            name: "Walking lunges",
            description: "10 steps",
            icon: "lunge",
        },
    ],
};

const STRETCH: Workout = Workout {
    title: "Running cool-down stretch",
    exercises: &[
        Exercise {
            name: "Standing quad stretch",
            description: "30 seconds each side",
            icon: "stretch",
        },
        Exercise {
            name: "Calf stretch against wall",
            description: "30 seconds each side",
            icon: "stretch",
        },
        Exercise {
            name: "Seated hamstring stretch",
            description: "45 seconds",
            icon: "stretch",
        },
        Exercise {
            name: "Figure-four glute stretch",
            description: "30 seconds each side",
            icon: "stretch",
        },
    ],
};

// ---------------------------------------------------------------------------
// Beginner
// ---------------------------------------------------------------------------

pub const BEGINNER: WorkoutPlan = WorkoutPlan {
    plan_type: PlanType::Running,
    level: "beginner",
    title: "Beginner running",
    mobility: MOBILITY,
    stretch: STRETCH,
    phases: PhaseWorkouts {
        menstrual: &[Workout {
            title: "Easy walk-jog",
            exercises: &[
                Exercise {
                    name: "Brisk walk",
                    description: "10 minutes",
                    icon: "walk",
                },
                Exercise {
                    name: "Jog / walk intervals",
                    description: "6 x 1 min jog, 2 min walk",
                    icon: "run",
                },
            ],
        }],
        follicular: &[
            Workout {
                title: "Building intervals",
                exercises: &[
                    Exercise {
                        name: "Warm-up jog",
                        description: "5 minutes easy",
                        icon: "run",
                    },
                    Exercise {
                        name: "Jog / walk intervals",
                        description: "6 x 3 min jog, 1 min walk",
                        icon: "run",
                    },
                ],
            },
            Workout {
                title: "Steady run",
                exercises: &[Exercise {
                    name: "Continuous easy run",
                    description: "20 minutes at conversational pace",
                    icon: "run",
                }],
            },
        ],
        ovulation: &[Workout {
            title: "Strides session",
            exercises: &[
                Exercise {
                    name: "Easy run",
                    description: "15 minutes",
                    icon: "run",
                },
                Exercise {
                    name: "Strides",
                    description: "4 x 20 seconds quick, full recovery",
                    icon: "sprint",
                },
            ],
        }],
        luteal: &[Workout {
            title: "Recovery run",
            exercises: &[
                Exercise {
                    name: "Easy run",
                    description: "15-20 minutes, keep breathing relaxed",
                    icon: "run",
                },
                Exercise {
                    name: "Walk",
                    description: "5 minutes",
                    icon: "walk",
                },
            ],
        }],
    },
};

// ---------------------------------------------------------------------------
// Intermediate
// ---------------------------------------------------------------------------

pub const INTERMEDIATE: WorkoutPlan = WorkoutPlan {
    plan_type: PlanType::Running,
    level: "intermediate",
    title: "Intermediate running",
    mobility: MOBILITY,
    stretch: STRETCH,
    phases: PhaseWorkouts {
        menstrual: &[Workout {
            title: "Easy aerobic run",
            exercises: &[Exercise {
                name: "Easy run",
                description: "25 minutes, zone 2",
                icon: "run",
            }],
        }],
        follicular: &[
            Workout {
                title: "Tempo run",
                exercises: &[
                    Exercise {
                        name: "Warm-up jog",
                        description: "10 minutes",
                        icon: "run",
                    },
                    Exercise {
                        name: "Tempo",
                        description: "2 x 8 minutes comfortably hard, 2 min jog between",
                        icon: "run",
                    },
                ],
            },
            Workout {
                title: "Long run",
                exercises: &[Exercise {
                    name: "Long easy run",
                    description: "50 minutes",
                    icon: "run",
                }],
            },
        ],
        ovulation: &[Workout {
            title: "Speed intervals",
            exercises: &[
                Exercise {
                    name: "Warm-up jog",
                    description: "10 minutes",
                    icon: "run",
                },
                Exercise {
                    name: "400m repeats",
                    description: "6 x 400m at 5k pace, 90 s jog recovery",
                    icon: "sprint",
                },
            ],
        }],
        luteal: &[Workout {
            title: "Steady aerobic run",
            exercises: &[Exercise {
                name: "Steady run",
                description: "30 minutes, ease off if heart rate drifts high",
                icon: "run",
            }],
        }],
    },
};

// ---------------------------------------------------------------------------
// Advanced
// ---------------------------------------------------------------------------

pub const ADVANCED: WorkoutPlan = WorkoutPlan {
    plan_type: PlanType::Running,
    level: "advanced",
    title: "Advanced running",
    mobility: MOBILITY,
    stretch: STRETCH,
    phases: PhaseWorkouts {
        menstrual: &[Workout {
            title: "Recovery run",
            exercises: &[Exercise {
                name: "Easy run",
                description: "35 minutes, zone 2",
                icon: "run",
            }],
        }],
        follicular: &[
            Workout {
                title: "Threshold session",
                exercises: &[
                    Exercise {
                        name: "Warm-up jog",
                        description: "15 minutes",
                        icon: "run",
                    },
                    Exercise {
                        name: "Threshold repeats",
                        description: "3 x 10 minutes at threshold, 2 min jog",
                        icon: "run",
                    },
                ],
            },
            Workout {
                title: "Progression long run",
                exercises: &[Exercise {
                    name: "Long run",
                    description: "80 minutes, last 20 at marathon pace",
                    icon: "run",
                }],
            },
        ],
        ovulation: &[Workout {
            title: "VO2 max intervals",
            exercises: &[
                Exercise {
                    name: "Warm-up jog",
                    description: "15 minutes with drills",
                    icon: "run",
                },
                Exercise {
                    name: "1k repeats",
                    description: "5 x 1000m at 3-5k pace, 2 min jog",
                    icon: "sprint",
                },
            ],
        }],
        luteal: &[
            Workout {
                title: "Aerobic maintenance",
                exercises: &[Exercise {
                    name: "Steady run",
                    description: "45 minutes, keep effort controlled",
                    icon: "run",
                }],
            },
            Workout {
                title: "Hill strength",
                exercises: &[Exercise {
                    name: "Hill repeats",
                    description: "6 x 60 seconds uphill, walk down",
                    icon: "hill",
                }],
            },
        ],
    },
};
