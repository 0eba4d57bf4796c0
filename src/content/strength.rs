use crate::models::{Exercise, PhaseWorkouts, PlanType, Workout, WorkoutPlan};

const MOBILITY: Workout = Workout {
    title: "Strength mobility",
    exercises: &[
        Exercise {
            name: "Cat-cow",
            description: "10 slow reps",
            icon: "spine",
        },
        Exercise {
            name: "World's greatest stretch",
            description: "5 each side",
            icon: "lunge",
        },
        Exercise {
            name: "Band pull-aparts",
            description: "15 reps",
            icon: "band",
        },
        Exercise {
            name: "Bodyweight squat",
            description: "10 reps, pause at the bottom",
            icon: "squat",
        },
    ],
};

const STRETCH: Workout = Workout {
    title: "Strength cool-down stretch",
    exercises: &[
        Exercise {
            name: "Child's pose",
            description: "60 seconds",
            icon: "stretch",
        },
        Exercise {
            name: "Doorway chest stretch",
            description: "30 seconds each side",
            icon: "stretch",
        },
        Exercise {
            name: "Pigeon pose",
            description: "45 seconds each side",
            icon: "stretch",
        },
    ],
};

// ---------------------------------------------------------------------------
// Beginner
// ---------------------------------------------------------------------------

pub const BEGINNER: WorkoutPlan = WorkoutPlan {
    plan_type: PlanType::Strength,
    level: "beginner",
    title: "Beginner strength",
    mobility: MOBILITY,
    stretch: STRETCH,
    phases: PhaseWorkouts {
        menstrual: &[Workout {
            title: "Gentle full body",
            exercises: &[
                Exercise {
                    name: "Glute bridge",
                    description: "2 x 12",
                    icon: "bridge",
                },
                Exercise {
                    name: "Bird dog",
                    description: "2 x 8 each side",
                    icon: "core",
                },
                Exercise {
                    name: "Wall push-up",
                    description: "2 x 10",
                    icon: "pushup",
                },
            ],
        }],
        follicular: &[
            Workout {
                title: "Lower body",
                exercises: &[
                    Exercise {
                        name: "Goblet squat",
                        description: "3 x 10",
                        icon: "squat",
                    },
                    Exercise {
                        name: "Romanian deadlift",
                        description: "3 x 10, light dumbbells",
                        icon: "dumbbell",
                    },
                    Exercise {
                        name: "Reverse lunge",
                        description: "3 x 8 each leg",
                        icon: "lunge",
                    },
                ],
            },
            Workout {
                title: "Upper body",
                exercises: &[
                    Exercise {
                        name: "Incline push-up",
                        description: "3 x 10",
                        icon: "pushup",
                    },
                    Exercise {
                        name: "Dumbbell row",
                        description: "3 x 10 each arm",
                        icon: "dumbbell",
                    },
                    Exercise {
                        name: "Overhead press",
                        description: "3 x 10",
                        icon: "dumbbell",
                    },
                ],
            },
        ],
        ovulation: &[Workout {
            title: "Full body power",
            exercises: &[
                Exercise {
                    name: "Squat to press",
                    description: "3 x 8",
                    icon: "dumbbell",
                },
                Exercise {
                    name: "Kettlebell deadlift",
                    description: "3 x 10",
                    icon: "kettlebell",
                },
                Exercise {
                    name: "Plank",
                    description: "3 x 30 seconds",
                    icon: "core",
                },
            ],
        }],
        luteal: &[Workout {
            title: "Steady full body",
            exercises: &[
                Exercise {
                    name: "Box squat",
                    description: "3 x 10",
                    icon: "squat",
                },
                Exercise {
                    name: "Seated row",
                    description: "3 x 12",
                    icon: "band",
                },
                Exercise {
                    name: "Dead bug",
                    description: "3 x 8 each side",
                    icon: "core",
                },
            ],
        }],
    },
};

// ---------------------------------------------------------------------------
// Intermediate
// ---------------------------------------------------------------------------

pub const INTERMEDIATE: WorkoutPlan = WorkoutPlan {
    plan_type: PlanType::Strength,
    level: "intermediate",
    title: "Intermediate strength",
    mobility: MOBILITY,
    stretch: STRETCH,
    phases: PhaseWorkouts {
        menstrual: &[Workout {
            title: "Light technique day",
            exercises: &[
                Exercise {
                    name: "Goblet squat",
                    description: "3 x 8, moderate weight",
                    icon: "squat",
                },
                Exercise {
                    name: "Hip thrust",
                    description: "3 x 10",
                    icon: "bridge",
                },
                Exercise {
                    name: "Side plank",
                    description: "2 x 30 seconds each side",
                    icon: "core",
                },
            ],
        }],
        follicular: &[
            Workout {
                title: "Heavy lower",
                exercises: &[
                    Exercise {
                        name: "Back squat",
                        description: "4 x 6",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Romanian deadlift",
                        description: "4 x 8",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Bulgarian split squat",
                        description: "3 x 8 each leg",
                        icon: "lunge",
                    },
                ],
            },
            Workout {
                title: "Heavy upper",
                exercises: &[
                    Exercise {
                        name: "Bench press",
                        description: "4 x 6",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Pull-up (assisted if needed)",
                        description: "4 x 6",
                        icon: "pullup",
                    },
                    Exercise {
                        name: "Overhead press",
                        description: "3 x 8",
                        icon: "barbell",
                    },
                ],
            },
        ],
        ovulation: &[Workout {
            title: "Strength and power",
            exercises: &[
                Exercise {
                    name: "Deadlift",
                    description: "5 x 5",
                    icon: "barbell",
                },
                Exercise {
                    name: "Box jump",
                    description: "4 x 5, land softly",
                    icon: "jump",
                },
                Exercise {
                    name: "Push press",
                    description: "3 x 6",
                    icon: "barbell",
                },
            ],
        }],
        luteal: &[Workout {
            title: "Volume day",
            exercises: &[
                Exercise {
                    name: "Leg press",
                    description: "3 x 12",
                    icon: "machine",
                },
                Exercise {
                    name: "Cable row",
                    description: "3 x 12",
                    icon: "machine",
                },
                Exercise {
                    name: "Pallof press",
                    description: "3 x 10 each side",
                    icon: "band",
                },
            ],
        }],
    },
};

// ---------------------------------------------------------------------------
// Advanced
// ---------------------------------------------------------------------------

pub const ADVANCED: WorkoutPlan = WorkoutPlan {
    plan_type: PlanType::Strength,
    level: "advanced",
    title: "Advanced strength",
    mobility: MOBILITY,
    stretch: STRETCH,
    phases: PhaseWorkouts {
        menstrual: &[Workout {
            title: "Deload",
            exercises: &[
                Exercise {
                    name: "Back squat",
                    description: "3 x 5 at 60%",
                    icon: "barbell",
                },
                Exercise {
                    name: "Single-leg RDL",
                    description: "3 x 8 each leg",
                    icon: "dumbbell",
                },
                Exercise {
                    name: "Farmer carry",
                    description: "3 x 30 m",
                    icon: "kettlebell",
                },
            ],
        }],
        follicular: &[
            Workout {
                title: "Max strength lower",
                exercises: &[
                    Exercise {
                        name: "Back squat",
                        description: "5 x 3 at 85%",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Deficit deadlift",
                        description: "4 x 4",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Nordic curl",
                        description: "3 x 5",
                        icon: "hamstring",
                    },
                ],
            },
            Workout {
                title: "Max strength upper",
                exercises: &[
                    Exercise {
                        name: "Bench press",
                        description: "5 x 3 at 85%",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Weighted pull-up",
                        description: "4 x 5",
                        icon: "pullup",
                    },
                    Exercise {
                        name: "Strict press",
                        description: "4 x 5",
                        icon: "barbell",
                    },
                ],
            },
        ],
        ovulation: &[Workout {
            title: "Power complex",
            exercises: &[
                Exercise {
                    name: "Hang power clean",
                    description: "5 x 3",
                    icon: "barbell",
                },
                Exercise {
                    name: "Trap bar jump",
                    description: "4 x 4",
                    icon: "jump",
                },
                Exercise {
                    name: "Medicine ball slam",
                    description: "3 x 8",
                    icon: "ball",
                },
            ],
        }],
        luteal: &[
            Workout {
                title: "Hypertrophy lower",
                exercises: &[
                    Exercise {
                        name: "Front squat",
                        description: "4 x 8",
                        icon: "barbell",
                    },
                    Exercise {
                        name: "Hip thrust",
                        description: "4 x 10",
                        icon: "bridge",
                    },
                ],
            },
            Workout {
                title: "Hypertrophy upper",
                exercises: &[
                    Exercise {
                        name: "Incline dumbbell press",
                        description: "4 x 10",
                        icon: "dumbbell",
                    },
                    Exercise {
                        name: "Chest-supported row",
                        description: "4 x 10",
                        icon: "dumbbell",
                    },
                ],
            },
        ],
    },
};
